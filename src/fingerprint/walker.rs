//! Filesystem walker collecting regular-file metadata

use crate::error::FingerprintError;
use crate::fingerprint::path;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Stat-level facts about one regular file
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetadata {
    /// Path relative to the walk root, `/`-separated
    pub relative_path: String,
    /// Size in bytes
    pub size: u64,
    /// Modification time in seconds since the Unix epoch
    pub modified: f64,
}

/// Walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Absolute subpaths whose subtrees are pruned
    pub excluded: Vec<PathBuf>,
    /// Skip entries whose name starts with `.` (default: true)
    pub skip_hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            excluded: Vec::new(),
            skip_hidden: true,
        }
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a walker with default configuration
    ///
    /// `root` is expected to be canonical; relative paths are derived from it verbatim.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the tree and collect metadata for every regular file
    ///
    /// Symlinks are never followed and never collected. Any failure after the
    /// root was opened aborts the walk; nothing collected so far is returned.
    pub fn walk(&self) -> Result<Vec<FileMetadata>, FingerprintError> {
        // Opening the root up front distinguishes "cannot enumerate" from mid-walk failures.
        std::fs::read_dir(&self.root).map_err(|e| {
            debug!(root = %self.root.display(), error = %e, "Root is not enumerable");
            FingerprintError::EnumerationFailed {
                root: self.root.clone(),
            }
        })?;

        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !self.should_prune(entry));

        for entry in walker {
            let entry = entry.map_err(|e| {
                if e.depth() == 0 {
                    FingerprintError::EnumerationFailed {
                        root: self.root.clone(),
                    }
                } else {
                    FingerprintError::Io(e.into())
                }
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(relative_path) = path::relative_path(&self.root, entry.path())? else {
                continue;
            };

            let metadata = entry.metadata().map_err(|e| FingerprintError::Io(e.into()))?;
            let modified = seconds_since_epoch(metadata.modified()?);

            trace!(path = %relative_path, size = metadata.len(), modified, "Visited file");

            files.push(FileMetadata {
                relative_path,
                size: metadata.len(),
                modified,
            });
        }

        debug!(file_count = files.len(), "Walked filesystem");
        Ok(files)
    }

    /// Whether an entry (and everything beneath it) should be skipped
    fn should_prune(&self, entry: &DirEntry) -> bool {
        if path::is_excluded(entry.path(), &self.config.excluded) {
            return true;
        }
        // The root is never hidden, even if its own name starts with a dot.
        entry.depth() > 0 && self.config.skip_hidden && path::is_hidden(entry.file_name())
    }
}

/// Convert a timestamp to fractional seconds; times before the epoch are negative
fn seconds_since_epoch(time: SystemTime) -> f64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs_f64(),
        Err(before) => -before.duration().as_secs_f64(),
    }
}
