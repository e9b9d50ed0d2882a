//! Dirprint: Directory Fingerprinting
//!
//! Detects whether a directory tree changed without reading file contents
//! and without keeping a full listing around for comparison. Each regular
//! file contributes a digest of (relative path, size, modification time);
//! the sorted digests fold into one root hash.
//!
//! ```no_run
//! use dirprint::capture;
//! use std::path::Path;
//!
//! let before = capture(Path::new("/srv/data"), &[])?;
//! // ... later ...
//! let after = capture(Path::new("/srv/data"), &[])?;
//! if after.changed(&before) {
//!     let diff = after.diff(&before);
//!     println!("{} paths changed", diff.total_count());
//! }
//! # Ok::<(), dirprint::error::FingerprintError>(())
//! ```
//!
//! Metadata-only hashing means an edit that preserves both size and
//! modification time is not detected.

pub mod cli;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod logging;
pub mod snapshot;
pub mod types;
pub mod watch;

pub use fingerprint::{capture, FingerprintBuilder};
pub use types::{Diff, FileEntry, Fingerprint};
