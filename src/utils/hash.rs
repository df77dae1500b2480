//! Content hashing utilities.

use xxhash_rust::xxh3::xxh3_64;

/// Compute a content hash for arbitrary bytes
#[must_use]
pub fn content_hash(data: &[u8]) -> u64 {
    xxh3_64(data)
}

/// Hex-encoded content hash, stable across runs and platforms.
#[must_use]
pub fn fingerprint(data: &[u8]) -> String {
    format!("{:016x}", content_hash(data))
}
