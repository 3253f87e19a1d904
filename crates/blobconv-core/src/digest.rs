//! Payload digests for inspecting decoded blobs.

use sha2::{Digest, Sha256};

use crate::blob::Blob;

/// SHA-256 of `bytes` as lowercase hex.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// What `inspect` reports about a decoded data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobSummary {
    pub media_type: String,
    pub len: usize,
    pub sha256: String,
}

impl BlobSummary {
    pub fn of(blob: &Blob) -> Self {
        Self {
            media_type: blob.media_type().to_string(),
            len: blob.len(),
            sha256: sha256_hex(blob.bytes()),
        }
    }
}
