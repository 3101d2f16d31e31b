//! Content id validation.
//!
//! Ids become storage keys under the state directory, so anything that could
//! steer the derived path out of it is rejected before any store mutation.

use thiserror::Error;

/// Rejection reasons for a content id.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentIdError {
    /// The id was empty.
    #[error("content id must not be empty")]
    Empty,
    /// The id contained a path separator, `..`, or a NUL byte.
    #[error("invalid content id: {0:?}")]
    InvalidCharacters(String),
}

/// Validate a caller-supplied content id.
///
/// An id must be non-empty and contain none of `/`, `\`, `..`, NUL.
///
/// # Errors
///
/// Returns [`ContentIdError`] describing the violated constraint.
pub fn validate_content_id(id: &str) -> Result<(), ContentIdError> {
    if id.is_empty() {
        return Err(ContentIdError::Empty);
    }
    if id.contains('/') || id.contains('\\') || id.contains("..") || id.contains('\0') {
        return Err(ContentIdError::InvalidCharacters(id.to_string()));
    }
    Ok(())
}
