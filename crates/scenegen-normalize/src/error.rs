//! Error types for normalization.
//!
//! These never reach the caller of [`normalize`](crate::normalize): each
//! one is absorbed into a fallback node and recorded as a diagnostic.

use thiserror::Error;

/// Result type for per-node normalization steps.
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Errors raised while normalizing a single node.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    /// The node is not a JSON object.
    #[error("expected a node object, found {found}")]
    NotAnObject { found: &'static str },

    /// A field is present but has the wrong shape.
    #[error("field '{field}' should be {expected}, found {found}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// The assembled tree failed the serialization round-trip.
    #[error("tree is not serializable: {0}")]
    NotSerializable(String),
}

/// JSON type name of a value, for error messages.
pub(crate) fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
