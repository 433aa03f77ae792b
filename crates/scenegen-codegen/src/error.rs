//! Error types for code generation.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// No serializer is registered under the requested id.
    #[error("Serializer not found: {0}")]
    SerializerNotFound(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IR interchange error.
    #[error("IR error: {0}")]
    Ir(#[from] scenegen_ir::IrError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A serializer failed internally.
    #[error("{message}")]
    Internal {
        message: String,
        details: Option<String>,
    },
}

/// The `{message, details}` pair shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl CodegenError {
    pub fn internal(message: impl Into<String>, details: Option<String>) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Short message plus elaboration for display.
    pub fn report(&self) -> ErrorReport {
        match self {
            Self::SerializerNotFound(id) => ErrorReport {
                message: "Serializer not found".to_string(),
                details: Some(format!("No serializer is registered for format '{}'", id)),
            },
            Self::Internal { message, details } => ErrorReport {
                message: message.clone(),
                details: details.clone(),
            },
            other => ErrorReport {
                message: "Code generation failed".to_string(),
                details: Some(other.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_report() {
        let report = CodegenError::SerializerNotFound("angular".into()).report();
        assert_eq!(report.message, "Serializer not found");
        assert!(report.details.unwrap().contains("'angular'"));
    }

    #[test]
    fn test_internal_report() {
        let err = CodegenError::internal("serializer panicked", Some("index out of bounds".into()));
        assert_eq!(err.to_string(), "serializer panicked");
        let report = err.report();
        assert_eq!(report.details.as_deref(), Some("index out of bounds"));
    }
}
