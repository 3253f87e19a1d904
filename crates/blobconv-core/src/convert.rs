//! The four conversions between data URIs, blobs, named files and reference URLs.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::blob::{Blob, NamedFile};
use crate::config::BlobconvConfig;
use crate::data_uri::media_type_of;
use crate::decode::Decoder;
use crate::error::ConvertError;
use crate::reader::{BlockingPoolReader, FileReader, ReadCompletion};
use crate::registry::{ObjectUrlTable, UrlRegistry};

/// Conversion front end over the injected decode, URL and read capabilities.
#[derive(Clone)]
pub struct Converter {
    decoder: Decoder,
    registry: Arc<dyn UrlRegistry>,
    reader: Arc<dyn FileReader>,
}

impl Converter {
    pub fn new(
        decoder: Decoder,
        registry: Arc<dyn UrlRegistry>,
        reader: Arc<dyn FileReader>,
    ) -> Self {
        Self {
            decoder,
            registry,
            reader,
        }
    }

    /// Builds a converter from config: decoder strategy and reference URL origin.
    pub fn from_config(cfg: &BlobconvConfig) -> Result<Self> {
        let table = ObjectUrlTable::with_origin(&cfg.origin)
            .with_context(|| format!("invalid origin in config: {}", cfg.origin))?;
        Ok(Self::new(
            Decoder::detect(cfg.decoder),
            Arc::new(table),
            Arc::new(BlockingPoolReader),
        ))
    }

    pub fn decoder(&self) -> Decoder {
        self.decoder
    }

    /// Registry the reference URLs live in; revocation goes through it.
    pub fn registry(&self) -> &Arc<dyn UrlRegistry> {
        &self.registry
    }

    /// Decodes `data:<media-type>;base64,<payload>` into a blob tagged with the media type.
    pub async fn base64_to_blob(&self, input: &str) -> Result<Blob, ConvertError> {
        let blob = self.decoder.decode(input).await?;
        tracing::debug!(
            media_type = blob.media_type(),
            len = blob.len(),
            "decoded data uri"
        );
        Ok(blob)
    }

    /// Decodes `input` into a file named `file_name`.
    ///
    /// The media type is checked here before decoding so a missing one fails
    /// before any payload work.
    pub async fn base64_to_file(
        &self,
        input: &str,
        file_name: &str,
    ) -> Result<NamedFile, ConvertError> {
        if input.is_empty() || file_name.is_empty() {
            return Err(ConvertError::InvalidArgument("base64 and file_name"));
        }
        let media_type = media_type_of(input).ok_or(ConvertError::MediaTypeMissing)?;
        let blob = self.base64_to_blob(input).await?;
        Ok(NamedFile::from_blob(blob, file_name, media_type))
    }

    /// Decodes `input` into a named file and registers a reference URL for it.
    /// The URL stays live until revoked through [`Converter::registry`].
    pub async fn base64_to_file_url(
        &self,
        input: &str,
        file_name: &str,
    ) -> Result<String, ConvertError> {
        if input.is_empty() || file_name.is_empty() {
            return Err(ConvertError::InvalidArgument("base64 and file_name"));
        }
        let file = self.base64_to_file(input, file_name).await?;
        Ok(self.registry.create_object_url(&file))
    }

    /// Reads `file` back into a data URI through the reader capability.
    pub async fn file_to_base64(&self, file: &NamedFile) -> Result<String, ConvertError> {
        let (done, rx) = ReadCompletion::channel();
        self.reader.read_as_data_url(file.clone(), done);
        match rx.await {
            Ok(Ok(data_url)) => {
                tracing::debug!(name = file.name(), "read file as data uri");
                Ok(data_url)
            }
            Ok(Err(e)) => {
                tracing::warn!(name = file.name(), error = %e, "file read failed");
                Err(ConvertError::ReadError(e))
            }
            Err(closed) => Err(ConvertError::ReadError(Box::new(closed))),
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(
            Decoder::Native,
            Arc::new(ObjectUrlTable::new()),
            Arc::new(BlockingPoolReader),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &str = "data:text/plain;base64,aGVsbG8=";

    #[tokio::test]
    async fn blob_from_hello() {
        let conv = Converter::default();
        let blob = conv.base64_to_blob(HELLO).await.unwrap();
        assert_eq!(blob.bytes(), b"hello");
        assert_eq!(blob.media_type(), "text/plain");
    }

    #[tokio::test]
    async fn blob_boundaries() {
        let conv = Converter::default();
        assert!(matches!(
            conv.base64_to_blob("").await,
            Err(ConvertError::InvalidArgument(_))
        ));
        assert!(matches!(
            conv.base64_to_blob("not-a-data-uri").await,
            Err(ConvertError::MediaTypeMissing)
        ));
    }

    #[tokio::test]
    async fn file_requires_both_arguments() {
        let conv = Converter::default();
        assert!(matches!(
            conv.base64_to_file(HELLO, "").await,
            Err(ConvertError::InvalidArgument(_))
        ));
        assert!(matches!(
            conv.base64_to_file("", "hello.txt").await,
            Err(ConvertError::InvalidArgument(_))
        ));
        assert!(matches!(
            conv.base64_to_file("garbage", "hello.txt").await,
            Err(ConvertError::MediaTypeMissing)
        ));
    }

    #[tokio::test]
    async fn file_round_trips_to_same_data_uri() {
        let conv = Converter::default();
        let file = conv.base64_to_file(HELLO, "hello.txt").await.unwrap();
        assert_eq!(file.name(), "hello.txt");
        assert_eq!(file.media_type(), "text/plain");
        assert_eq!(conv.file_to_base64(&file).await.unwrap(), HELLO);
    }

    #[tokio::test]
    async fn repeated_calls_are_value_equal() {
        let conv = Converter::default();
        let a = conv.base64_to_file(HELLO, "hello.txt").await.unwrap();
        let b = conv.base64_to_file(HELLO, "hello.txt").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(
            conv.file_to_base64(&a).await.unwrap(),
            conv.file_to_base64(&b).await.unwrap()
        );
    }

    #[tokio::test]
    async fn file_url_is_registered() {
        let conv = Converter::default();
        let url = conv.base64_to_file_url(HELLO, "hello.txt").await.unwrap();
        let file = conv.registry().resolve(&url).expect("registered");
        assert_eq!(file.bytes(), b"hello");
        assert!(matches!(
            conv.base64_to_file_url(HELLO, "").await,
            Err(ConvertError::InvalidArgument(_))
        ));
    }

    #[test]
    fn from_config_selects_decoder() {
        let cfg = BlobconvConfig {
            decoder: crate::decode::DecoderKind::Fetch,
            ..BlobconvConfig::default()
        };
        assert_eq!(Converter::from_config(&cfg).unwrap().decoder(), Decoder::Fetch);
        assert_eq!(Converter::default().decoder(), Decoder::Native);
    }

    #[test]
    fn from_config_rejects_bad_origin() {
        let cfg = BlobconvConfig {
            origin: "not a url".to_string(),
            ..BlobconvConfig::default()
        };
        assert!(Converter::from_config(&cfg).is_err());
    }
}
