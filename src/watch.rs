//! Polling support for watched directories
//!
//! A watch is a persisted definition (id, root, creation time) owned by an
//! external store. This module only consumes those definitions: it derives
//! exclusions for nested watches and drives capture/compare cycles. Scheduling
//! between polls is left to the caller.

use crate::error::FingerprintError;
use crate::fingerprint::{self, path};
use crate::types::{Diff, Fingerprint};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Length of a generated watch id in hex chars
const WATCH_ID_LEN: usize = 12;

/// A directory registered for change detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchDefinition {
    pub id: String,
    pub root: PathBuf,
    pub created_at: DateTime<Utc>,
}

impl WatchDefinition {
    /// Create a definition for `root`, stamped with the current time
    pub fn new(root: PathBuf) -> Self {
        let created_at = Utc::now();
        let mut hasher = blake3::Hasher::new();
        hasher.update(root.to_string_lossy().as_bytes());
        hasher.update(created_at.to_rfc3339().as_bytes());
        let id = hasher.finalize().to_hex().as_str()[..WATCH_ID_LEN].to_string();
        Self {
            id,
            root,
            created_at,
        }
    }
}

/// Roots of other definitions strictly inside `root`
///
/// Passing these as excluded subpaths keeps files of a nested watch from also
/// being counted by the enclosing one.
pub fn nested_exclusions(definitions: &[WatchDefinition], root: &Path) -> Vec<PathBuf> {
    let root = path::canonicalize_lenient(root);
    let mut nested: Vec<PathBuf> = definitions
        .iter()
        .map(|definition| path::canonicalize_lenient(&definition.root))
        .filter(|other| other != &root && other.starts_with(&root))
        .collect();
    nested.sort();
    nested.dedup();
    nested
}

/// Result of one poll cycle
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// First successful capture; nothing to compare against yet
    Baseline(Fingerprint),
    /// Root hash identical to the previous capture
    Unchanged,
    /// Root hash differs; the diff is relative to the previous capture
    Changed(Diff),
}

/// Capture/compare driver for one watch
pub struct Poller {
    definition: WatchDefinition,
    excluded: Vec<PathBuf>,
    baseline: Option<Fingerprint>,
}

impl Poller {
    pub fn new(definition: WatchDefinition) -> Self {
        Self {
            definition,
            excluded: Vec::new(),
            baseline: None,
        }
    }

    /// Prune these subpaths from every capture
    pub fn with_excluded(mut self, excluded: Vec<PathBuf>) -> Self {
        self.excluded = excluded;
        self
    }

    /// Seed the poller with a previously captured fingerprint
    pub fn with_baseline(mut self, baseline: Fingerprint) -> Self {
        self.baseline = Some(baseline);
        self
    }

    pub fn definition(&self) -> &WatchDefinition {
        &self.definition
    }

    /// The most recent successful capture
    pub fn baseline(&self) -> Option<&Fingerprint> {
        self.baseline.as_ref()
    }

    /// Capture once and compare against the baseline
    ///
    /// On failure the baseline is kept: the state is unknown for this cycle,
    /// and the next successful poll is compared against the last known state.
    pub fn poll(&mut self) -> Result<PollOutcome, FingerprintError> {
        let current = match fingerprint::capture(&self.definition.root, &self.excluded) {
            Ok(current) => current,
            Err(e) => {
                debug!(watch_id = %self.definition.id, error = %e, "Poll capture failed");
                return Err(e);
            }
        };

        let outcome = match &self.baseline {
            None => PollOutcome::Baseline(current.clone()),
            Some(previous) if !current.changed(previous) => {
                debug!(watch_id = %self.definition.id, "No change");
                return Ok(PollOutcome::Unchanged);
            }
            Some(previous) => {
                let diff = current.diff(previous);
                info!(
                    watch_id = %self.definition.id,
                    added = diff.added().len(),
                    removed = diff.removed().len(),
                    modified = diff.modified().len(),
                    "Change detected"
                );
                PollOutcome::Changed(diff)
            }
        };

        self.baseline = Some(current);
        Ok(outcome)
    }
}
