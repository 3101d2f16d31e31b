//! Audit error types.

use thiserror::Error;

/// Errors from appending to the audit log.
///
/// Reads never produce these: a missing log is an empty one and corrupt
/// lines are skipped.
#[derive(Debug, Error)]
pub enum AuditError {
    /// An entry could not be serialized.
    #[error("audit entry serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing filesystem rejected the append.
    #[error(transparent)]
    Vfs(#[from] sigil_vfs::VfsError),
}

/// Result alias for audit operations.
pub type AuditResult<T> = Result<T, AuditError>;
