//! Snapshot files: persisting a fingerprint as JSON between runs.

use crate::error::ApiError;
use crate::types::Fingerprint;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write a fingerprint to `path` as pretty JSON, creating parent directories
pub fn save(path: &Path, fingerprint: &Fingerprint) -> Result<(), ApiError> {
    let snapshot_error = |message: String| ApiError::SnapshotError {
        path: path.to_path_buf(),
        message,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| snapshot_error(format!("Failed to create directory: {}", e)))?;
    }

    let json = serde_json::to_string_pretty(fingerprint)
        .map_err(|e| snapshot_error(format!("Failed to serialize: {}", e)))?;
    fs::write(path, json).map_err(|e| snapshot_error(format!("Failed to write: {}", e)))?;

    debug!(path = %path.display(), root_hash = %fingerprint.hash(), "Saved snapshot");
    Ok(())
}

/// Read a fingerprint previously written by [`save`]
///
/// The stored root hash is checked against the stored entries.
pub fn load(path: &Path) -> Result<Fingerprint, ApiError> {
    let snapshot_error = |message: String| ApiError::SnapshotError {
        path: path.to_path_buf(),
        message,
    };

    let json = fs::read_to_string(path).map_err(|e| snapshot_error(format!("Failed to read: {}", e)))?;
    let fingerprint: Fingerprint =
        serde_json::from_str(&json).map_err(|e| snapshot_error(format!("Invalid snapshot: {}", e)))?;

    debug!(path = %path.display(), root_hash = %fingerprint.hash(), "Loaded snapshot");
    Ok(fingerprint)
}
