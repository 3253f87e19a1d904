//! CLI command handlers, one per file.

mod decode;
mod encode;
mod inspect;
mod out_path;
mod url;

pub use decode::run_decode;
pub use encode::run_encode;
pub use inspect::run_inspect;
pub use url::run_url;

use anyhow::{Context, Result};
use std::path::Path;

/// Resolves a command-line data URI argument: `@path` reads the URI from a file.
pub(crate) async fn read_input(input: &str) -> Result<String> {
    match input.strip_prefix('@') {
        Some(path) => {
            let path = Path::new(path);
            let text = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("read input {}", path.display()))?;
            Ok(text.trim_end().to_string())
        }
        None => Ok(input.to_string()),
    }
}
