//! Config error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from writing configuration.
///
/// Loading never produces these: any read or parse failure yields the
/// default configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be written.
    #[error("failed to write config to {path}: {source}")]
    Write {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration could not be serialized.
    #[error("config serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
