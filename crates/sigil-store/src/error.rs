//! Store error types.

use thiserror::Error;

/// Errors from store write operations.
///
/// Reads never produce these: missing and corrupt records are result values.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Metadata could not be serialized.
    #[error("signature serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing filesystem rejected a write.
    #[error(transparent)]
    Vfs(#[from] sigil_vfs::VfsError),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
