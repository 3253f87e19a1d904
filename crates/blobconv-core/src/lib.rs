pub mod config;
pub mod logging;

pub mod blob;
pub mod convert;
pub mod data_uri;
pub mod decode;
pub mod digest;
pub mod error;
pub mod reader;
pub mod registry;

pub use blob::{Blob, NamedFile};
pub use convert::Converter;
pub use error::ConvertError;
