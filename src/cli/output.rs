//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, FingerprintError};

/// Map domain errors to a message for stderr.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Fingerprint(FingerprintError::EnumerationFailed { root }) => format!(
            "Cannot read directory {}: it does not exist, is not a directory, or is not readable",
            root.display()
        ),
        _ => e.to_string(),
    }
}
