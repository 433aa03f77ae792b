//! Error types for the IR interchange format.

use thiserror::Error;

/// Result type for IR operations.
pub type Result<T> = std::result::Result<T, IrError>;

/// Errors raised while moving an IR tree across the JSON boundary.
#[derive(Debug, Error)]
pub enum IrError {
    /// The tree could not be serialized or parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The tree parsed, but does not match what was serialized.
    #[error("round-trip mismatch for node '{id}'")]
    RoundTripMismatch { id: String },
}
