//! `blobconv encode <path>` – print a local file as a data URI.

use anyhow::{Context, Result};
use blobconv_core::{Converter, NamedFile};
use std::path::Path;

pub async fn run_encode(converter: &Converter, path: &Path, media_type: &str) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file = NamedFile::new(bytes, name, media_type);
    let data_url = converter
        .file_to_base64(&file)
        .await
        .with_context(|| format!("encode {}", path.display()))?;
    println!("{data_url}");
    Ok(data_url)
}
