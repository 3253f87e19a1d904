//! Data URI parsing and encoding.
//!
//! Only the base64 form `data:<media-type>;base64,<payload>` is handled. The
//! media type is taken verbatim; nothing beyond its presence is validated.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::ConvertError;

/// Marker separating the media type from the payload header.
const BASE64_MARKER: &str = ";base64";

/// Media type used when encoding a value that has none.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Extracts the media type of a data URI.
///
/// The header is everything before the first `;base64`; the media type is the
/// piece of the header between its first and second `:`. Returns `None` when
/// that piece is missing or empty.
///
/// # Examples
///
/// - `media_type_of("data:text/plain;base64,aGk=")` → `Some("text/plain")`
/// - `media_type_of("not-a-data-uri")` → `None`
pub fn media_type_of(input: &str) -> Option<&str> {
    let header = input.split(BASE64_MARKER).next()?;
    header.split(':').nth(1).filter(|s| !s.is_empty())
}

/// Extracts the payload: the piece between the first and second `,`.
/// Returns `None` when the input has no comma.
pub fn payload_of(input: &str) -> Option<&str> {
    input.split(',').nth(1)
}

/// Encodes `bytes` as `data:<media_type>;base64,<payload>` (standard, padded).
/// An empty media type is written as `application/octet-stream`.
pub fn encode_data_uri(bytes: &[u8], media_type: &str) -> String {
    let media_type = if media_type.is_empty() {
        FALLBACK_MEDIA_TYPE
    } else {
        media_type
    };
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

/// Borrowed view of a validated data URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUri<'a> {
    pub media_type: &'a str,
    pub payload: &'a str,
}

impl<'a> DataUri<'a> {
    /// Validates `input` in order: non-empty, media type present, payload present.
    pub fn parse(input: &'a str) -> Result<Self, ConvertError> {
        if input.is_empty() {
            return Err(ConvertError::InvalidArgument("base64"));
        }
        let media_type = media_type_of(input).ok_or(ConvertError::MediaTypeMissing)?;
        let payload = payload_of(input).ok_or_else(|| {
            ConvertError::MalformedPayload("no ',' before the payload".to_string())
        })?;
        Ok(DataUri {
            media_type,
            payload,
        })
    }
}
