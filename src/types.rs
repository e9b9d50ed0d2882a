//! Core value types: per-file entries, fingerprints and diffs.

use crate::error::FingerprintError;
use crate::fingerprint::{compare, hasher};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// EntryHash: 16 hex chars of truncated BLAKE3 over (path, size, mtime)
pub type EntryHash = String;

/// RootHash: 32 hex chars of truncated BLAKE3 over the sorted entries
pub type RootHash = String;

/// Metadata digest of one regular file
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the capture root, `/`-separated
    pub relative_path: String,
    /// Entry hash of (relative path, size, modification time)
    pub hash: EntryHash,
}

/// Point-in-time snapshot of a directory's file metadata
///
/// Entries are always sorted by relative path and `hash` is always the root
/// digest of exactly those entries. Deserialization additionally rejects a
/// record that lists the same relative path twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FingerprintRecord")]
pub struct Fingerprint {
    entries: Vec<FileEntry>,
    hash: RootHash,
}

/// Unvalidated wire shape of a fingerprint
#[derive(Deserialize)]
struct FingerprintRecord {
    entries: Vec<FileEntry>,
    hash: RootHash,
}

impl TryFrom<FingerprintRecord> for Fingerprint {
    type Error = FingerprintError;

    fn try_from(record: FingerprintRecord) -> Result<Self, Self::Error> {
        let fingerprint = Fingerprint::from_entries(record.entries);
        if let Some(pair) = fingerprint
            .entries
            .windows(2)
            .find(|pair| pair[0].relative_path == pair[1].relative_path)
        {
            return Err(FingerprintError::DuplicatePath {
                relative_path: pair[0].relative_path.clone(),
            });
        }
        if fingerprint.hash != record.hash {
            return Err(FingerprintError::HashMismatch {
                expected: record.hash,
                actual: fingerprint.hash,
            });
        }
        Ok(fingerprint)
    }
}

impl Fingerprint {
    /// Build a fingerprint from entries in any order
    pub fn from_entries(mut entries: Vec<FileEntry>) -> Self {
        entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        let hash = hasher::compute_root_hash(&entries);
        Self { entries, hash }
    }

    /// Entries sorted ascending by relative path
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Root digest
    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for a relative path
    pub fn get(&self, relative_path: &str) -> Option<&FileEntry> {
        self.entries
            .binary_search_by(|entry| entry.relative_path.as_str().cmp(relative_path))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Whether this fingerprint differs from `from`. O(1).
    pub fn changed(&self, from: &Fingerprint) -> bool {
        compare::changed(self, from)
    }

    /// Paths added, removed and modified going from `from` to `self`
    pub fn diff(&self, from: &Fingerprint) -> Diff {
        compare::diff(self, from)
    }
}

/// Added, removed and modified relative paths between two fingerprints
///
/// The three sets are pairwise disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diff {
    pub(crate) added: BTreeSet<String>,
    pub(crate) removed: BTreeSet<String>,
    pub(crate) modified: BTreeSet<String>,
}

impl Diff {
    pub fn added(&self) -> &BTreeSet<String> {
        &self.added
    }

    pub fn removed(&self) -> &BTreeSet<String> {
        &self.removed
    }

    pub fn modified(&self) -> &BTreeSet<String> {
        &self.modified
    }

    /// True when no path was added, removed or modified
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    /// Number of changed paths across all three sets
    pub fn total_count(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }
}
