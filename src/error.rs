//! Error types for directory fingerprinting.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while capturing or restoring a fingerprint
#[derive(Debug, Error)]
pub enum FingerprintError {
    /// The root could not be enumerated (missing, not a directory, or unreadable).
    #[error("Failed to enumerate directory: {}", root.display())]
    EnumerationFailed { root: PathBuf },

    /// Any I/O failure after enumeration started. Aborts the whole capture.
    #[error("I/O error during capture: {0}")]
    Io(#[from] std::io::Error),

    /// A file name is not valid UTF-8 and cannot be stored as a relative path.
    #[error("File name is not valid UTF-8: {}", path.display())]
    InvalidPathName { path: PathBuf },

    /// Two entries share one relative path; a fingerprint holds each path once.
    #[error("Duplicate entry for path: {relative_path}")]
    DuplicatePath { relative_path: String },

    #[error("Fingerprint hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: String, actual: String },
}

/// Errors surfaced by the outer layers (config, logging, snapshots, CLI)
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Fingerprint(#[from] FingerprintError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Snapshot error at {}: {message}", path.display())]
    SnapshotError { path: PathBuf, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
