//! Shared helpers for building scratch trees with pinned metadata

use filetime::{set_file_mtime, FileTime};
use std::fs;
use std::path::Path;

/// Fixed modification time used by tests that compare separate trees
pub const PINNED_MTIME: i64 = 1_700_000_000;

/// Write a file (creating parents) and pin its modification time
pub fn write_pinned(root: &Path, relative: &str, contents: &str, mtime: i64) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    set_file_mtime(&path, FileTime::from_unix_time(mtime, 0)).unwrap();
}

/// Set a file's modification time without touching its contents
pub fn touch(root: &Path, relative: &str, mtime: i64) {
    set_file_mtime(root.join(relative), FileTime::from_unix_time(mtime, 0)).unwrap();
}
