//! Controller error types.

use thiserror::Error;

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The upload request failed. The session keeps its local preview
    /// so the user can retry or reset.
    #[error("Upload failed: {0}")]
    Upload(#[from] formsight_client::ClientError),
}
