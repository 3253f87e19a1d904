//! `blobconv decode <input> --name <file>` – write a data URI's bytes to disk.

use anyhow::{Context, Result};
use blobconv_core::Converter;
use std::path::{Path, PathBuf};

use super::out_path::default_out_path;
use super::read_input;

pub async fn run_decode(
    converter: &Converter,
    input: &str,
    name: &str,
    out: Option<&Path>,
) -> Result<PathBuf> {
    let input = read_input(input).await?;
    let file = converter
        .base64_to_file(&input, name)
        .await
        .context("decode data uri")?;
    let out = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_out_path(file.name()));
    tokio::fs::write(&out, file.bytes())
        .await
        .with_context(|| format!("write {}", out.display()))?;
    tracing::info!(
        "decoded {} bytes ({}) to {}",
        file.bytes().len(),
        file.media_type(),
        out.display()
    );
    println!(
        "Wrote {} bytes ({}) to {}",
        file.bytes().len(),
        file.media_type(),
        out.display()
    );
    Ok(out)
}
