//! Metadata and root digest computation using BLAKE3
//!
//! No file content is ever hashed here. A file edited without its size or
//! modification time changing (clock skew, some sync tools that restore mtimes)
//! produces the same entry hash and goes undetected.

use crate::types::FileEntry;
use blake3::Hasher;

/// Number of digest bytes kept for an entry hash (16 hex chars)
pub const ENTRY_HASH_BYTES: usize = 8;

/// Number of digest bytes kept for a root hash (32 hex chars)
pub const ROOT_HASH_BYTES: usize = 16;

/// Compute the entry hash for one regular file
///
/// EntryHash = hash(relative_path || size_be || mtime_bits_be)[..8]
///
/// `modified` is seconds since the Unix epoch; fractional seconds are kept.
pub fn compute_entry_hash(relative_path: &str, size: u64, modified: f64) -> String {
    let mut hasher = Hasher::new();

    hasher.update(relative_path.as_bytes());

    // Size (8 bytes, big-endian for determinism)
    hasher.update(&size.to_be_bytes());

    // Modification time (IEEE-754 bits, big-endian)
    hasher.update(&modified.to_bits().to_be_bytes());

    truncated_hex(hasher, ENTRY_HASH_BYTES)
}

/// Fold sorted entries into a root hash
///
/// RootHash = hash("path:hash" || "path:hash" || ...)[..16]
///
/// Entries must already be sorted by relative path.
pub fn compute_root_hash(entries: &[FileEntry]) -> String {
    let mut hasher = Hasher::new();

    for entry in entries {
        hasher.update(entry.relative_path.as_bytes());
        hasher.update(b":");
        hasher.update(entry.hash.as_bytes());
    }

    truncated_hex(hasher, ROOT_HASH_BYTES)
}

fn truncated_hex(hasher: Hasher, len: usize) -> String {
    let digest = hasher.finalize();
    hex::encode(&digest.as_bytes()[..len])
}
