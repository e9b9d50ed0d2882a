//! Comparing fingerprints: root-hash check and path-level diff

use crate::types::{Diff, Fingerprint};
use std::collections::{BTreeSet, HashMap};

/// Whether two fingerprints describe different directory states
///
/// A single comparison of root digests; call this every poll and only
/// compute a [`diff`] when it reports a change.
pub fn changed(a: &Fingerprint, b: &Fingerprint) -> bool {
    a.hash() != b.hash()
}

/// Compute added, removed and modified paths going from `old` to `new`
pub fn diff(new: &Fingerprint, old: &Fingerprint) -> Diff {
    let old_map: HashMap<&str, &str> = old
        .entries()
        .iter()
        .map(|e| (e.relative_path.as_str(), e.hash.as_str()))
        .collect();
    let new_map: HashMap<&str, &str> = new
        .entries()
        .iter()
        .map(|e| (e.relative_path.as_str(), e.hash.as_str()))
        .collect();

    let mut added = BTreeSet::new();
    let mut modified = BTreeSet::new();
    for (path, new_hash) in &new_map {
        match old_map.get(path) {
            None => {
                added.insert(path.to_string());
            }
            Some(old_hash) if old_hash != new_hash => {
                modified.insert(path.to_string());
            }
            Some(_) => {}
        }
    }

    let removed = old_map
        .keys()
        .filter(|path| !new_map.contains_key(*path))
        .map(|path| path.to_string())
        .collect();

    Diff {
        added,
        removed,
        modified,
    }
}
