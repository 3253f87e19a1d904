//! File readers that misbehave in controlled ways.

use std::io;
use std::time::Duration;

use blobconv_core::data_uri::encode_data_uri;
use blobconv_core::reader::{FileReader, ReadCompletion};
use blobconv_core::NamedFile;

/// Always fails with the given io error kind.
pub struct FailingReader(pub io::ErrorKind);

impl FileReader for FailingReader {
    fn read_as_data_url(&self, _file: NamedFile, done: ReadCompletion) {
        done.fail(io::Error::new(self.0, "simulated read failure"));
    }
}

/// Drops the completion handle without reporting.
pub struct SilentReader;

impl FileReader for SilentReader {
    fn read_as_data_url(&self, _file: NamedFile, done: ReadCompletion) {
        drop(done);
    }
}

/// Reports from a spawned task after a delay.
pub struct DelayedReader(pub Duration);

impl FileReader for DelayedReader {
    fn read_as_data_url(&self, file: NamedFile, done: ReadCompletion) {
        let delay = self.0;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            done.succeed(encode_data_uri(file.bytes(), file.media_type()));
        });
    }
}
