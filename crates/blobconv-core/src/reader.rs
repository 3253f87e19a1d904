//! Asynchronous "read as data URL" capability.
//!
//! A reader is handed the file and a [`ReadCompletion`]; it reports exactly
//! once, from any thread, and the caller awaits the other end.

use tokio::sync::oneshot;

use crate::blob::NamedFile;
use crate::data_uri::encode_data_uri;
use crate::error::ReadFailure;

pub(crate) type ReadOutcome = Result<String, ReadFailure>;

/// Completion handle for one read. Dropping it unreported counts as a failed read.
#[derive(Debug)]
pub struct ReadCompletion {
    tx: oneshot::Sender<ReadOutcome>,
}

impl ReadCompletion {
    pub(crate) fn channel() -> (Self, oneshot::Receiver<ReadOutcome>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Reports the file contents as a data URI.
    pub fn succeed(self, data_url: String) {
        // Receiver gone means the caller stopped waiting; nothing to report to.
        let _ = self.tx.send(Ok(data_url));
    }

    /// Reports a read failure; it reaches the caller unmodified.
    pub fn fail(self, err: impl Into<ReadFailure>) {
        let _ = self.tx.send(Err(err.into()));
    }
}

/// Reads a named file's contents as `data:<media-type>;base64,<payload>`.
pub trait FileReader: Send + Sync {
    fn read_as_data_url(&self, file: NamedFile, done: ReadCompletion);
}

/// Encodes on tokio's blocking pool. Needs a running tokio runtime; without
/// one the read fails instead of panicking.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingPoolReader;

impl FileReader for BlockingPoolReader {
    fn read_as_data_url(&self, file: NamedFile, done: ReadCompletion) {
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(h) => h,
            Err(e) => return done.fail(e),
        };
        handle.spawn_blocking(move || {
            done.succeed(encode_data_uri(file.bytes(), file.media_type()));
        });
    }
}
