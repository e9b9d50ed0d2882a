//! CLI parse: clap types for dirprint. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dirprint CLI - cheap change detection for directory trees
#[derive(Parser)]
#[command(name = "dirprint")]
#[command(about = "Detect changes in directory trees using metadata fingerprints")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Capture a fingerprint of a directory
    Capture {
        /// Directory to fingerprint
        root: PathBuf,
        /// Subpath to prune from the capture (repeatable)
        #[arg(long)]
        exclude: Vec<PathBuf>,
        /// Save the fingerprint to this file
        #[arg(long)]
        output: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Compare a saved fingerprint with another one or with a fresh capture
    Diff {
        /// Saved fingerprint to compare from
        snapshot: PathBuf,
        /// Saved fingerprint to compare to
        #[arg(long, conflicts_with = "root", required_unless_present = "root")]
        against: Option<PathBuf>,
        /// Directory to capture and compare to
        #[arg(long)]
        root: Option<PathBuf>,
        /// Subpath to prune from the fresh capture (repeatable)
        #[arg(long, requires = "root")]
        exclude: Vec<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Poll a directory and report changes
    Watch {
        /// Directory to watch
        root: PathBuf,
        /// Subpath to prune from every capture (repeatable)
        #[arg(long)]
        exclude: Vec<PathBuf>,
        /// Seconds between polls (default from config)
        #[arg(long)]
        interval: Option<u64>,
        /// Stop after this many polls
        #[arg(long)]
        count: Option<u64>,
        /// Start from a saved fingerprint instead of a fresh baseline
        #[arg(long)]
        baseline: Option<PathBuf>,
    },
}
