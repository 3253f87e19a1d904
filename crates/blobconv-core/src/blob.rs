//! In-memory binary values: [`Blob`] and [`NamedFile`].

use std::sync::Arc;

/// Immutable byte sequence tagged with a media type.
///
/// Bytes are reference-counted, so clones share storage. Equality compares
/// contents and media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    bytes: Arc<[u8]>,
    media_type: String,
}

impl Blob {
    pub fn new(bytes: impl Into<Arc<[u8]>>, media_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            media_type: media_type.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A blob with a file name: the unit that gets reference URLs and is read back to base64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedFile {
    blob: Blob,
    name: String,
}

impl NamedFile {
    pub fn new(
        bytes: impl Into<Arc<[u8]>>,
        name: impl Into<String>,
        media_type: impl Into<String>,
    ) -> Self {
        Self {
            blob: Blob::new(bytes, media_type),
            name: name.into(),
        }
    }

    /// Wraps an existing blob's bytes (shared, not copied) under `name`, typed as `media_type`.
    pub fn from_blob(blob: Blob, name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            blob: Blob {
                bytes: blob.bytes,
                media_type: media_type.into(),
            },
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        self.blob.media_type()
    }

    pub fn bytes(&self) -> &[u8] {
        self.blob.bytes()
    }

    pub fn blob(&self) -> &Blob {
        &self.blob
    }
}
