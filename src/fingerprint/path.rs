//! Path utilities: relative path derivation, hidden entries, exclusions

use crate::error::FingerprintError;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Canonicalize the capture root
///
/// A root that cannot be resolved cannot be enumerated either, so failure
/// here is reported as `EnumerationFailed`.
pub fn canonicalize_root(root: &Path) -> Result<PathBuf, FingerprintError> {
    dunce::canonicalize(root).map_err(|_| FingerprintError::EnumerationFailed {
        root: root.to_path_buf(),
    })
}

/// Canonicalize a path if it exists, otherwise return it unchanged
///
/// Used for excluded subpaths, which may legitimately not exist yet.
pub fn canonicalize_lenient(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Compute the path of `path` relative to `root`
///
/// Returns `Ok(None)` for the root itself or for paths outside it. Separators
/// are always `/`. Names are kept byte for byte: two names that differ only in
/// Unicode normalization form stay two distinct paths. A name that is not
/// valid UTF-8 fails with `InvalidPathName` rather than being replaced lossily.
pub fn relative_path(root: &Path, path: &Path) -> Result<Option<String>, FingerprintError> {
    let Ok(stripped) = path.strip_prefix(root) else {
        return Ok(None);
    };

    let mut names = Vec::new();
    for component in stripped.components() {
        if let Component::Normal(name) = component {
            let name = name.to_str().ok_or_else(|| FingerprintError::InvalidPathName {
                path: path.to_path_buf(),
            })?;
            names.push(name);
        }
    }

    if names.is_empty() {
        Ok(None)
    } else {
        Ok(Some(names.join("/")))
    }
}

/// Whether a file name denotes a hidden entry
pub fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Whether `path` lies at or under any excluded subpath
///
/// Matching is by whole components: `/a/foo` excludes `/a/foo/x` but not `/a/foobar`.
pub fn is_excluded(path: &Path, excluded: &[PathBuf]) -> bool {
    excluded.iter().any(|prefix| path.starts_with(prefix))
}
