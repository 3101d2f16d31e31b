//! VFS error types.

use thiserror::Error;

/// Errors from filesystem operations and path containment.
#[derive(Debug, Error)]
pub enum VfsError {
    /// A caller-supplied path resolved outside the project root.
    #[error("path escapes project root: {0}")]
    Escape(String),

    /// The file or directory does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for VFS operations.
pub type VfsResult<T> = Result<T, VfsError>;
