//! Integration tests for capture determinism

use super::test_utils::{write_pinned, PINNED_MTIME};
use dirprint::fingerprint::hasher;
use dirprint::{capture, FingerprintBuilder};
use std::fs;
use tempfile::TempDir;

/// Same tree captured twice yields the same root hash
#[test]
fn test_same_tree_same_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(root.join("file1.txt"), "content1").unwrap();
    fs::write(root.join("file2.txt"), "content2").unwrap();
    fs::create_dir(root.join("dir1")).unwrap();
    fs::write(root.join("dir1").join("file3.txt"), "content3").unwrap();

    let first = capture(root, &[]).unwrap();
    let second = capture(root, &[]).unwrap();

    assert_eq!(first.hash(), second.hash());
    assert_eq!(first.entries(), second.entries());
    assert!(!second.changed(&first));
}

/// Trees populated in different orders hash identically
#[test]
fn test_creation_order_does_not_matter() {
    let temp_a = TempDir::new().unwrap();
    let temp_b = TempDir::new().unwrap();

    write_pinned(temp_a.path(), "alpha.txt", "a", PINNED_MTIME);
    write_pinned(temp_a.path(), "nested/beta.txt", "bb", PINNED_MTIME);
    write_pinned(temp_a.path(), "zeta.txt", "zzz", PINNED_MTIME);

    write_pinned(temp_b.path(), "zeta.txt", "zzz", PINNED_MTIME);
    write_pinned(temp_b.path(), "nested/beta.txt", "bb", PINNED_MTIME);
    write_pinned(temp_b.path(), "alpha.txt", "a", PINNED_MTIME);

    let a = capture(temp_a.path(), &[]).unwrap();
    let b = capture(temp_b.path(), &[]).unwrap();

    assert_eq!(a.hash(), b.hash());
}

/// The root hash depends only on relative paths, not where the tree lives
#[test]
fn test_absolute_location_does_not_matter() {
    let temp_dir = TempDir::new().unwrap();
    let first_root = temp_dir.path().join("one");
    let second_root = temp_dir.path().join("somewhere").join("else");

    for root in [&first_root, &second_root] {
        write_pinned(root, "readme.md", "hello", PINNED_MTIME);
        write_pinned(root, "src/lib.rs", "pub fn f() {}", PINNED_MTIME + 5);
    }

    let first = capture(&first_root, &[]).unwrap();
    let second = capture(&second_root, &[]).unwrap();

    assert_eq!(first.hash(), second.hash());
    assert_eq!(first.entries()[1].relative_path, "src/lib.rs");
}

/// An empty directory produces zero entries and the hash of empty input
#[test]
fn test_empty_directory_fixed_root() {
    let temp_a = TempDir::new().unwrap();
    let temp_b = TempDir::new().unwrap();

    let a = capture(temp_a.path(), &[]).unwrap();
    let b = capture(temp_b.path(), &[]).unwrap();

    assert!(a.is_empty());
    assert_eq!(a.hash(), b.hash());
    assert_eq!(a.hash(), hasher::compute_root_hash(&[]));
}

/// Content is never read: same size and mtime means same entry hash
#[test]
fn test_content_change_with_same_metadata_is_invisible() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_pinned(root, "data.bin", "aaaa", PINNED_MTIME);
    let before = capture(root, &[]).unwrap();

    write_pinned(root, "data.bin", "bbbb", PINNED_MTIME);
    let after = capture(root, &[]).unwrap();

    assert!(!after.changed(&before));
}

/// Entry hashes follow the documented (path, size, mtime) recipe
#[test]
fn test_entry_hash_uses_path_size_and_mtime() {
    let temp_dir = TempDir::new().unwrap();
    write_pinned(temp_dir.path(), "dir/file.txt", "12345", PINNED_MTIME);

    let fingerprint = capture(temp_dir.path(), &[]).unwrap();
    let entry = fingerprint.get("dir/file.txt").unwrap();

    assert_eq!(
        entry.hash,
        hasher::compute_entry_hash("dir/file.txt", 5, PINNED_MTIME as f64)
    );
}

/// Hidden files and directories are skipped unless requested
#[test]
fn test_hidden_entries_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_pinned(root, "visible.txt", "v", PINNED_MTIME);
    let before = capture(root, &[]).unwrap();

    write_pinned(root, ".cache/blob", "x", PINNED_MTIME);
    write_pinned(root, ".DS_Store", "x", PINNED_MTIME);
    let after = capture(root, &[]).unwrap();

    assert!(!after.changed(&before));

    let with_hidden = FingerprintBuilder::new(root.to_path_buf())
        .include_hidden(true)
        .capture()
        .unwrap();
    assert_eq!(with_hidden.len(), 3);
}
