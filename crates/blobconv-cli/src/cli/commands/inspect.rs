//! `blobconv inspect <input>` – summarize a data URI's payload.

use anyhow::{Context, Result};
use blobconv_core::digest::BlobSummary;
use blobconv_core::Converter;

use super::read_input;

pub async fn run_inspect(converter: &Converter, input: &str) -> Result<BlobSummary> {
    let input = read_input(input).await?;
    let blob = converter
        .base64_to_blob(&input)
        .await
        .context("decode data uri")?;
    let summary = BlobSummary::of(&blob);
    println!("media type: {}", summary.media_type);
    println!("size:       {} bytes", summary.len);
    println!("sha256:     {}", summary.sha256);
    Ok(summary)
}
