//! Schema error types
//!
//! Error codes:
//! - RECORDCHECK_MALFORMED_SCHEMA
//! - RECORDCHECK_DUPLICATE_MODEL
//! - RECORDCHECK_SCHEMA_IO

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while building or loading a schema registry
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    #[error("Malformed schema file '{path}': {reason}")]
    MalformedSchema { path: String, reason: String },

    #[error("Model '{0}' is already registered")]
    DuplicateModel(String),

    #[error("Failed to read '{path}': {reason}")]
    Io { path: String, reason: String },
}

impl SchemaError {
    /// Create a malformed schema error
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::MalformedSchema {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error
    pub fn io(path: impl Into<String>, reason: impl ToString) -> Self {
        SchemaError::Io {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::MalformedSchema { .. } => "RECORDCHECK_MALFORMED_SCHEMA",
            SchemaError::DuplicateModel(_) => "RECORDCHECK_DUPLICATE_MODEL",
            SchemaError::Io { .. } => "RECORDCHECK_SCHEMA_IO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchemaError::malformed("a.json", "bad").code(), "RECORDCHECK_MALFORMED_SCHEMA");
        assert_eq!(SchemaError::DuplicateModel("User".into()).code(), "RECORDCHECK_DUPLICATE_MODEL");
        assert_eq!(SchemaError::io("a.json", "denied").code(), "RECORDCHECK_SCHEMA_IO");
    }

    #[test]
    fn test_display_includes_context() {
        let err = SchemaError::malformed("models/user.json", "Invalid JSON");
        let display = err.to_string();
        assert!(display.contains("models/user.json"));
        assert!(display.contains("Invalid JSON"));
    }
}
