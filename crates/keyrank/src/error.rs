//! Error types for the extraction API

use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while parsing or ranking a document
#[derive(Error, Debug)]
pub enum ExtractError {
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Document violates a structural invariant of the wire format
    #[error("Invalid document: {reason}")]
    InvalidDocument { reason: String },

    /// The requested pipeline selector is not recognized
    #[error("Unknown pipeline: {0}")]
    UnknownPipeline(String),
}
