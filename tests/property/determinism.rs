//! Property-based tests for fingerprint and diff invariants

use dirprint::{FileEntry, Fingerprint};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn entries_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-z]{1,4}(/[a-z]{1,4}){0,2}", "[0-9a-f]{16}", 0..24)
}

fn to_entries(map: &BTreeMap<String, String>) -> Vec<FileEntry> {
    map.iter()
        .map(|(path, hash)| FileEntry {
            relative_path: path.clone(),
            hash: hash.clone(),
        })
        .collect()
}

proptest! {
    /// Root hash does not depend on the order entries were produced in
    #[test]
    fn prop_root_hash_order_independent(map in entries_strategy(), seed in any::<u64>()) {
        let sorted = to_entries(&map);
        let mut shuffled = sorted.clone();
        // Deterministic rotation + reversal driven by the seed.
        if !shuffled.is_empty() {
            let len = shuffled.len();
            shuffled.rotate_left((seed as usize) % len);
        }
        if seed % 2 == 0 {
            shuffled.reverse();
        }

        let a = Fingerprint::from_entries(sorted);
        let b = Fingerprint::from_entries(shuffled);
        prop_assert_eq!(a.hash(), b.hash());
        prop_assert!(!a.changed(&b));
    }

    /// Diff sets are disjoint and account for every differing path
    #[test]
    fn prop_diff_partitions_changes(old in entries_strategy(), new in entries_strategy()) {
        let old_fp = Fingerprint::from_entries(to_entries(&old));
        let new_fp = Fingerprint::from_entries(to_entries(&new));
        let diff = new_fp.diff(&old_fp);

        prop_assert!(diff.added().is_disjoint(diff.removed()));
        prop_assert!(diff.added().is_disjoint(diff.modified()));
        prop_assert!(diff.removed().is_disjoint(diff.modified()));

        for path in diff.added() {
            prop_assert!(new.contains_key(path) && !old.contains_key(path));
        }
        for path in diff.removed() {
            prop_assert!(old.contains_key(path) && !new.contains_key(path));
        }
        for path in diff.modified() {
            prop_assert_ne!(&old[path], &new[path]);
        }

        prop_assert_eq!(diff.is_empty(), old == new);
        prop_assert_eq!(new_fp.changed(&old_fp), old != new);
    }

    /// Adding one entry always changes the root hash
    #[test]
    fn prop_addition_changes_root(map in entries_strategy(), hash in "[0-9a-f]{16}") {
        let base = Fingerprint::from_entries(to_entries(&map));
        let mut extended = to_entries(&map);
        extended.push(FileEntry {
            relative_path: "zzzzz-added".to_string(),
            hash,
        });
        let grown = Fingerprint::from_entries(extended);

        prop_assert!(grown.changed(&base));
        prop_assert_eq!(grown.diff(&base).total_count(), 1);
    }
}
