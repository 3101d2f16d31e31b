//! Engine error types.

use sigil_audit::AuditError;
use sigil_core::ContentIdError;
use sigil_store::StoreError;
use sigil_vfs::VfsError;
use thiserror::Error;

/// Errors raised by signing and verification operations.
///
/// Verification outcomes (unsigned, modified, corrupted) are ordinary result
/// values, not errors. Only containment violations, invalid content ids and
/// state I/O failures surface here.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested path resolves outside the project root.
    #[error("path escapes project root: {path}")]
    PathEscape {
        /// The offending request as given by the caller.
        path: String,
    },

    /// The content id contains path separators or traversal sequences.
    #[error(transparent)]
    InvalidId(#[from] ContentIdError),

    /// The target file could not be read for signing.
    #[error("cannot read {file}: {source}")]
    Read {
        /// Project-relative path of the file.
        file: String,
        /// Underlying filesystem error.
        source: VfsError,
    },

    /// Writing signature state failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Appending to the audit log failed.
    #[error(transparent)]
    Audit(#[from] AuditError),
}

/// Convenience alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
