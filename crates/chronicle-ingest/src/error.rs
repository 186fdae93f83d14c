//! Error types for corpus ingestion

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Errors that can occur during ingestion
///
/// Only systemic failures surface here; per-record problems are skipped and
/// counted in the [`crate::Corpus`] diagnostics instead.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Corpus file or directory could not be read
    #[error("Failed to read corpus at {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Corpus file is not valid JSON
    #[error("Invalid corpus JSON in {path}: {source}")]
    Json {
        /// Path that failed
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Corpus top-level structure is not an array of records
    #[error("Corpus at {0} must be a JSON array of records")]
    NotAnArray(PathBuf),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
