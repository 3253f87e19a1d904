//! Data URL resolution as done by a fetch of a `data:` URL, off the async thread.

use tokio::task::JoinError;

use crate::error::ConvertError;

/// Decodes the payload on the blocking pool and waits for it.
pub(super) async fn fetch_data_url(payload: String) -> Result<Vec<u8>, ConvertError> {
    tokio::task::spawn_blocking(move || super::forgiving_decode(payload.as_bytes()))
        .await
        .map_err(join_failure)?
}

/// A blocking task that panicked or was cancelled is a failed read.
fn join_failure(e: JoinError) -> ConvertError {
    tracing::warn!(error = %e, "data url fetch task failed");
    ConvertError::ReadError(Box::new(e))
}
