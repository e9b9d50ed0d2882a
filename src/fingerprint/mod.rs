//! Directory Fingerprinting
//!
//! Captures a directory tree as a sorted list of per-file metadata digests
//! folded into one root digest. Comparing two captures is a single root-hash
//! comparison; a path-level diff is only computed when that reports a change.

pub mod builder;
pub mod compare;
pub mod hasher;
pub mod path;
pub mod walker;

pub use builder::{capture, FingerprintBuilder};
pub use compare::{changed, diff};
