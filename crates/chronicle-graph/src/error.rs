//! Error types for graph construction

use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur during graph construction
#[derive(Error, Debug)]
pub enum GraphError {
    /// Configuration rejected before any processing began
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two documents share an id; the selector requires unique ids
    #[error("Duplicate document id: {0}")]
    DuplicateId(String),
}
