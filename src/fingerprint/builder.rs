//! Fingerprint builder: walk, hash metadata, sort, fold

use crate::error::FingerprintError;
use crate::fingerprint::hasher;
use crate::fingerprint::path;
use crate::fingerprint::walker::{Walker, WalkerConfig};
use crate::types::{FileEntry, Fingerprint};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Builder for directory fingerprints
pub struct FingerprintBuilder {
    root: PathBuf,
    walker_config: WalkerConfig,
}

impl FingerprintBuilder {
    /// Create a builder for the given root with no exclusions
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            walker_config: WalkerConfig::default(),
        }
    }

    /// Prune these absolute subpaths (and everything below them) from the walk
    pub fn with_excluded<I, P>(mut self, excluded: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.walker_config.excluded = excluded
            .into_iter()
            .map(|p| path::canonicalize_lenient(p.as_ref()))
            .collect();
        self
    }

    /// Include hidden entries instead of skipping them
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.walker_config.skip_hidden = !include;
        self
    }

    /// Capture a fingerprint of the tree
    ///
    /// All or nothing: if any file's metadata cannot be read, the whole
    /// capture fails and no partial fingerprint is produced.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn capture(&self) -> Result<Fingerprint, FingerprintError> {
        let start = Instant::now();

        let root = path::canonicalize_root(&self.root)?;
        let walker = Walker::with_config(root, self.walker_config.clone());

        let files = walker.walk()?;

        let entries: Vec<FileEntry> = files
            .into_iter()
            .map(|file| FileEntry {
                hash: hasher::compute_entry_hash(&file.relative_path, file.size, file.modified),
                relative_path: file.relative_path,
            })
            .collect();
        debug!(entry_count = entries.len(), "Hashed file metadata");

        let fingerprint = Fingerprint::from_entries(entries);

        info!(
            entry_count = fingerprint.len(),
            root_hash = %fingerprint.hash(),
            duration_ms = start.elapsed().as_millis(),
            "Fingerprint captured"
        );

        Ok(fingerprint)
    }
}

/// Capture a fingerprint of `root`, pruning every subtree in `excluded`
pub fn capture(root: &Path, excluded: &[PathBuf]) -> Result<Fingerprint, FingerprintError> {
    FingerprintBuilder::new(root.to_path_buf())
        .with_excluded(excluded)
        .capture()
}
