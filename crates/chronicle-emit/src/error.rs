//! Error types for artifact emission

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for emission operations.
pub type Result<T> = std::result::Result<T, EmitError>;

/// Errors that can occur while writing or verifying artifacts
#[derive(Error, Debug)]
pub enum EmitError {
    /// I/O failure writing or reading an artifact; the run aborts and no
    /// partial file is left under its final name
    #[error("Artifact I/O failed for {path}: {source}")]
    Io {
        /// Artifact path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An artifact failed to serialize or re-parse
    #[error("Artifact JSON error for {path}: {source}")]
    Json {
        /// Artifact path
        path: PathBuf,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EmitError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EmitError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        EmitError::Json {
            path: path.into(),
            source,
        }
    }
}
