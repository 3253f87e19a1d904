//! CLI for blobconv.

mod commands;

use anyhow::Result;
use blobconv_core::config;
use blobconv_core::Converter;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_decode, run_encode, run_inspect, run_url};

/// Top-level CLI for blobconv.
#[derive(Debug, Parser)]
#[command(name = "blobconv")]
#[command(about = "blobconv: convert between base64 data URIs, files and object URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decode a data URI into a named file.
    Decode {
        /// Data URI, or `@path` to read it from a file.
        input: String,
        /// File name carried by the decoded file.
        #[arg(long)]
        name: String,
        /// Where to write the bytes (defaults to the file name).
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Encode a local file as a data URI.
    Encode {
        /// Path to the file.
        path: PathBuf,
        /// Media type for the data URI (defaults to config `default_media_type`).
        #[arg(long, value_name = "TYPE")]
        media_type: Option<String>,
    },

    /// Decode a data URI and print a reference URL for it.
    Url {
        /// Data URI, or `@path` to read it from a file.
        input: String,
        /// File name carried by the decoded file.
        #[arg(long)]
        name: String,
    },

    /// Print media type, size and SHA-256 of a data URI's payload.
    Inspect {
        /// Data URI, or `@path` to read it from a file.
        input: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let converter = Converter::from_config(&cfg)?;
        tracing::debug!(decoder = ?converter.decoder(), "converter ready");

        match cli.command {
            CliCommand::Decode { input, name, out } => {
                run_decode(&converter, &input, &name, out.as_deref()).await?;
            }
            CliCommand::Encode { path, media_type } => {
                let media_type = media_type.unwrap_or_else(|| cfg.default_media_type.clone());
                run_encode(&converter, &path, &media_type).await?;
            }
            CliCommand::Url { input, name } => {
                run_url(&converter, &input, &name).await?;
            }
            CliCommand::Inspect { input } => {
                run_inspect(&converter, &input).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
