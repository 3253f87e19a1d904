//! Reference URLs for named files (`blob:<origin>/<id>`).
//!
//! The registry is the only shared mutable state in the crate. Each created URL
//! owns one entry until it is revoked; the converter only ever creates.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use url::Url;

use crate::blob::NamedFile;

/// Allocates process-local reference URLs for named files.
pub trait UrlRegistry: Send + Sync {
    /// Registers `file` and returns a URL unique within this registry.
    fn create_object_url(&self, file: &NamedFile) -> String;

    /// Drops the entry for `url`. Returns false if it was unknown or already revoked.
    fn revoke_object_url(&self, url: &str) -> bool;

    /// Looks up the file behind a live URL.
    fn resolve(&self, url: &str) -> Option<NamedFile>;
}

/// In-memory URL table keyed by the URL string.
pub struct ObjectUrlTable {
    prefix: String,
    next_id: AtomicU64,
    entries: RwLock<HashMap<String, NamedFile>>,
}

impl ObjectUrlTable {
    /// Table whose URLs carry an opaque origin (`blob:null/...`).
    pub fn new() -> Self {
        Self::with_prefix("blob:null/".to_string())
    }

    /// Table whose URLs carry the serialized origin of `origin`, e.g.
    /// `https://example.com/app` yields `blob:https://example.com/...`.
    /// `"null"` selects the opaque origin.
    pub fn with_origin(origin: &str) -> Result<Self, url::ParseError> {
        if origin == "null" {
            return Ok(Self::new());
        }
        let parsed = Url::parse(origin)?;
        let serialized = parsed.origin().ascii_serialization();
        Ok(Self::with_prefix(format!("blob:{}/", serialized)))
    }

    fn with_prefix(prefix: String) -> Self {
        Self {
            prefix,
            next_id: AtomicU64::new(1),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of live (unrevoked) URLs.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ObjectUrlTable {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlRegistry for ObjectUrlTable {
    fn create_object_url(&self, file: &NamedFile) -> String {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let url = format!("{}{:016x}", self.prefix, id);
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.clone(), file.clone());
        tracing::debug!(%url, name = file.name(), "object url created");
        url
    }

    fn revoke_object_url(&self, url: &str) -> bool {
        let removed = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(url)
            .is_some();
        if removed {
            tracing::debug!(%url, "object url revoked");
        }
        removed
    }

    fn resolve(&self, url: &str) -> Option<NamedFile> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(url)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> NamedFile {
        NamedFile::new(vec![0u8, 1, 2, 3], name, "application/octet-stream")
    }

    #[test]
    fn urls_are_unique_per_call() {
        let table = ObjectUrlTable::new();
        let a = table.create_object_url(&file("a.bin"));
        let b = table.create_object_url(&file("a.bin"));
        assert_ne!(a, b);
        assert!(a.starts_with("blob:null/"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn resolve_and_revoke() {
        let table = ObjectUrlTable::new();
        let f = file("x.bin");
        let url = table.create_object_url(&f);
        assert_eq!(table.resolve(&url), Some(f));
        assert!(table.revoke_object_url(&url));
        assert!(!table.revoke_object_url(&url));
        assert_eq!(table.resolve(&url), None);
        assert!(table.is_empty());
    }

    #[test]
    fn origin_is_serialized() {
        let table = ObjectUrlTable::with_origin("https://example.com:443/app/index.html").unwrap();
        let url = table.create_object_url(&file("x.bin"));
        assert!(url.starts_with("blob:https://example.com/"), "{url}");
    }

    #[test]
    fn null_origin_and_invalid_origin() {
        let table = ObjectUrlTable::with_origin("null").unwrap();
        assert!(table.create_object_url(&file("x")).starts_with("blob:null/"));
        assert!(ObjectUrlTable::with_origin("not a url").is_err());
    }
}
