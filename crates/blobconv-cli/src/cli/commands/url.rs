//! `blobconv url <input> --name <file>` – register a reference URL.

use anyhow::{Context, Result};
use blobconv_core::Converter;

use super::read_input;

/// Prints the URL. It is only meaningful for the lifetime of this process.
pub async fn run_url(converter: &Converter, input: &str, name: &str) -> Result<String> {
    let input = read_input(input).await?;
    let url = converter
        .base64_to_file_url(&input, name)
        .await
        .context("create reference url")?;
    println!("{url}");
    Ok(url)
}
