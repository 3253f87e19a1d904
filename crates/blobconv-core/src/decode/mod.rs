//! Base64 payload decoding for data URIs.
//!
//! Two strategies share one decode contract: `Native` decodes the payload in
//! place, `Fetch` resolves it on the blocking pool the way a `data:` URL fetch
//! does. Both run the same [`forgiving_decode`], so results and errors match.
//! The strategy is picked once from configuration via [`Decoder::detect`].

mod fetch;
mod percent;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::blob::Blob;
use crate::data_uri::DataUri;
use crate::error::ConvertError;

/// Standard alphabet; padding optional, non-zero trailing bits ignored.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decoder selection as written in config.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecoderKind {
    #[default]
    Auto,
    Native,
    Fetch,
}

/// Decode capability used by [`Converter`](crate::Converter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    Native,
    Fetch,
}

impl Decoder {
    /// Resolves the configured kind to a concrete strategy. `Auto` picks the
    /// native decoder, which is always compiled in.
    pub fn detect(kind: DecoderKind) -> Self {
        let decoder = match kind {
            DecoderKind::Auto | DecoderKind::Native => Decoder::Native,
            DecoderKind::Fetch => Decoder::Fetch,
        };
        tracing::debug!(?kind, ?decoder, "selected base64 decoder");
        decoder
    }

    /// Decodes a data URI into a blob tagged with its media type.
    pub async fn decode(&self, input: &str) -> Result<Blob, ConvertError> {
        let uri = DataUri::parse(input)?;
        let bytes = match self {
            Decoder::Native => forgiving_decode(uri.payload.as_bytes())?,
            Decoder::Fetch => fetch::fetch_data_url(uri.payload.to_owned()).await?,
        };
        Ok(Blob::new(bytes, uri.media_type))
    }
}

/// Forgiving base64 over a percent-decoded payload: `%3D`-style escapes are
/// resolved, ASCII whitespace is skipped, `=` padding is optional.
pub(crate) fn forgiving_decode(payload: &[u8]) -> Result<Vec<u8>, ConvertError> {
    let compact: Vec<u8> = percent::percent_decode(payload)
        .into_iter()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    FORGIVING
        .decode(&compact)
        .map_err(|e| ConvertError::MalformedPayload(e.to_string()))
}
