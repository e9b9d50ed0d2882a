//! CLI route: single route table and run context. Dispatches to the library and presentation.

use crate::cli::output::map_error;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_capture_json, format_capture_text, format_diff_json, format_diff_text,
    format_poll_outcome,
};
use crate::config::{ConfigLoader, DirprintConfig};
use crate::error::ApiError;
use crate::fingerprint;
use crate::snapshot;
use crate::types::Fingerprint;
use crate::watch::{Poller, WatchDefinition};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Run context: loaded configuration plus output preferences
pub struct RunContext {
    config: DirprintConfig,
    color: bool,
}

impl RunContext {
    /// Load configuration from `config_path` or from the default sources
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: DirprintConfig) -> Self {
        Self {
            config,
            color: false,
        }
    }

    /// Colorize text output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn config(&self) -> &DirprintConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table, writing results to `out`.
    pub fn execute<W: Write>(&self, command: &Commands, out: &mut W) -> Result<(), ApiError> {
        match command {
            Commands::Capture {
                root,
                exclude,
                output,
                format,
            } => self.handle_capture(root, exclude, output.as_deref(), format, out),
            Commands::Diff {
                snapshot,
                against,
                root,
                exclude,
                format,
            } => self.handle_diff(snapshot, against.as_deref(), root.as_deref(), exclude, format, out),
            Commands::Watch {
                root,
                exclude,
                interval,
                count,
                baseline,
            } => self.handle_watch(root, exclude, *interval, *count, baseline.as_deref(), out),
        }
    }

    /// Command-line exclusions plus those from configuration
    fn exclusions(&self, exclude: &[PathBuf]) -> Vec<PathBuf> {
        exclude
            .iter()
            .chain(self.config.watch.exclude.iter())
            .cloned()
            .collect()
    }

    fn handle_capture<W: Write>(
        &self,
        root: &Path,
        exclude: &[PathBuf],
        output: Option<&Path>,
        format: &str,
        out: &mut W,
    ) -> Result<(), ApiError> {
        let fingerprint = fingerprint::capture(root, &self.exclusions(exclude))?;

        if let Some(path) = output {
            snapshot::save(path, &fingerprint)?;
            info!(path = %path.display(), "Snapshot written");
        }

        let rendered = if format == "json" {
            format_capture_json(&fingerprint)?
        } else {
            format_capture_text(root, &fingerprint)
        };
        writeln!(out, "{}", rendered)?;
        Ok(())
    }

    fn handle_diff<W: Write>(
        &self,
        snapshot_path: &Path,
        against: Option<&Path>,
        root: Option<&Path>,
        exclude: &[PathBuf],
        format: &str,
        out: &mut W,
    ) -> Result<(), ApiError> {
        let old = snapshot::load(snapshot_path)?;
        let new: Fingerprint = match (against, root) {
            (Some(path), _) => snapshot::load(path)?,
            (None, Some(root)) => fingerprint::capture(root, &self.exclusions(exclude))?,
            (None, None) => {
                return Err(ApiError::ConfigError(
                    "diff needs either --against or --root".to_string(),
                ))
            }
        };

        // Only pay for the path-level diff when the root hashes disagree.
        let diff = if new.changed(&old) {
            new.diff(&old)
        } else {
            Default::default()
        };

        let rendered = if format == "json" {
            format_diff_json(&old, &new, &diff)?
        } else {
            format_diff_text(&old, &new, &diff, self.color)
        };
        writeln!(out, "{}", rendered)?;
        Ok(())
    }

    fn handle_watch<W: Write>(
        &self,
        root: &Path,
        exclude: &[PathBuf],
        interval: Option<u64>,
        count: Option<u64>,
        baseline: Option<&Path>,
        out: &mut W,
    ) -> Result<(), ApiError> {
        let interval_secs = interval.unwrap_or(self.config.watch.interval_secs);
        if interval_secs == 0 {
            return Err(ApiError::ConfigError(
                "--interval must be greater than zero".to_string(),
            ));
        }

        let definition = WatchDefinition::new(root.to_path_buf());
        let mut poller = Poller::new(definition).with_excluded(self.exclusions(exclude));
        if let Some(path) = baseline {
            poller = poller.with_baseline(snapshot::load(path)?);
        }

        info!(
            watch_id = %poller.definition().id,
            root = %root.display(),
            interval_secs,
            "Watching"
        );

        let mut polls = 0u64;
        loop {
            match poller.poll() {
                Ok(outcome) => {
                    writeln!(out, "{}", format_poll_outcome(poller.definition(), &outcome, self.color))?;
                }
                // Without any known state there is nothing to compare against later.
                Err(e) if poller.baseline().is_none() => return Err(e.into()),
                Err(e) => {
                    let e = ApiError::from(e);
                    warn!(error = %e, "Directory state unknown this cycle");
                    writeln!(out, "poll failed: {}", map_error(&e))?;
                }
            }
            out.flush()?;

            polls += 1;
            if count.is_some_and(|limit| polls >= limit) {
                return Ok(());
            }
            std::thread::sleep(Duration::from_secs(interval_secs));
        }
    }
}
