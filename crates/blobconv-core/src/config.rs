use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::data_uri::FALLBACK_MEDIA_TYPE;
use crate::decode::DecoderKind;

/// Global configuration loaded from `~/.config/blobconv/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobconvConfig {
    /// Base64 decoder: "auto" (default), "native" or "fetch".
    pub decoder: DecoderKind,
    /// Origin embedded in reference URLs; "null" for an opaque origin.
    pub origin: String,
    /// Media type used by `encode` when none is given on the command line.
    pub default_media_type: String,
}

impl Default for BlobconvConfig {
    fn default() -> Self {
        Self {
            decoder: DecoderKind::Auto,
            origin: "null".to_string(),
            default_media_type: FALLBACK_MEDIA_TYPE.to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("blobconv")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BlobconvConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BlobconvConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: BlobconvConfig = toml::from_str(&data)?;
    Ok(cfg)
}
