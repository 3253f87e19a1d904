//! Error kinds surfaced by the conversion operations.

use thiserror::Error;

/// Failure reported by a [`FileReader`](crate::reader::FileReader), kept as-is.
pub type ReadFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every conversion either succeeds with a complete value or fails with exactly one of these.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A required argument was empty. Carries the argument name(s).
    #[error("missing required argument: {0}")]
    InvalidArgument(&'static str),
    /// The data URI has no media type between `:` and `;base64`.
    #[error("get file type error: data URI has no media type")]
    MediaTypeMissing,
    /// The payload after the comma is missing or is not base64.
    #[error("malformed base64 payload: {0}")]
    MalformedPayload(String),
    /// The asynchronous read failed; the underlying failure is the source.
    #[error("file read failed")]
    ReadError(#[source] ReadFailure),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn invalid_argument_names_the_parameter() {
        let e = ConvertError::InvalidArgument("base64 and file_name");
        assert_eq!(
            e.to_string(),
            "missing required argument: base64 and file_name"
        );
    }

    #[test]
    fn read_error_keeps_source_unmodified() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e = ConvertError::ReadError(Box::new(io));
        let src = e.source().expect("source");
        assert_eq!(src.to_string(), "denied");
        let io = src.downcast_ref::<std::io::Error>().expect("io error");
        assert_eq!(io.kind(), std::io::ErrorKind::PermissionDenied);
    }
}
