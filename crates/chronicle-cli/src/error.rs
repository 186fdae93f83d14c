//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Corpus loading error
    #[error("Ingestion error: {0}")]
    Ingest(#[from] chronicle_ingest::IngestError),

    /// Graph construction error
    #[error("Graph error: {0}")]
    Graph(#[from] chronicle_graph::GraphError),

    /// Artifact emission or verification error
    #[error("Artifact error: {0}")]
    Emit(#[from] chronicle_emit::EmitError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Verification found invariant violations
    #[error("Verification failed with {0} problem(s)")]
    VerificationFailed(usize),
}
