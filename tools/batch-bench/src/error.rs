//! Error types for the benchmark harness

use thiserror::Error;

/// Result type alias for benchmark harness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during benchmark operations
#[derive(Error, Debug)]
pub enum Error {
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Corpus encoding produced an internally inconsistent payload
    #[error("Encoding failed: {reason}")]
    Encode { reason: String },

    /// An extraction entry point failed
    #[error("extraction call failed: {0}")]
    Extraction(String),

    /// A strategy pass failed during a benchmark round
    #[error("{strategy} strategy failed ({phase}, round {round}): {message}")]
    Round {
        strategy: String,
        phase: String,
        round: usize,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
