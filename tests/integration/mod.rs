//! Integration tests for directory fingerprinting

mod fingerprint_determinism;
mod snapshot_roundtrip;
mod test_utils;
