//! CLI-specific error types

use std::fmt;
use std::io;

use crate::schema::SchemaError;
use crate::validation::{RuleError, ValidationError};

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout/files)
    IoError,
    /// Schema could not be loaded
    SchemaError,
    /// Requested model does not exist
    ModelNotFound,
    /// Record failed validation
    InvalidRecord,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "RECORDCHECK_CLI_CONFIG_ERROR",
            Self::IoError => "RECORDCHECK_CLI_IO_ERROR",
            Self::SchemaError => "RECORDCHECK_CLI_SCHEMA_ERROR",
            Self::ModelNotFound => "RECORDCHECK_CLI_MODEL_NOT_FOUND",
            Self::InvalidRecord => "RECORDCHECK_CLI_INVALID_RECORD",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Record failed validation
    pub fn invalid_record(summary: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidRecord, summary)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        Self::new(CliErrorCode::SchemaError, format!("[{}] {}", e.code(), e))
    }
}

impl From<RuleError> for CliError {
    fn from(e: RuleError) -> Self {
        Self::config_error(format!("[{}] {}", e.code(), e))
    }
}

impl From<ValidationError> for CliError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::ModelNotFound { .. } => {
                Self::new(CliErrorCode::ModelNotFound, e.to_string())
            }
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("schema_path is required");
        assert_eq!(
            err.to_string(),
            "RECORDCHECK_CLI_CONFIG_ERROR: schema_path is required"
        );
    }

    #[test]
    fn test_from_validation_error() {
        let err: CliError = ValidationError::model_not_found("Invoice").into();
        assert_eq!(err.code(), &CliErrorCode::ModelNotFound);
        assert!(err.message().contains("Invoice"));
    }

    #[test]
    fn test_from_schema_error() {
        let err: CliError = SchemaError::DuplicateModel("User".into()).into();
        assert_eq!(err.code_str(), "RECORDCHECK_CLI_SCHEMA_ERROR");
        assert!(err.message().contains("RECORDCHECK_DUPLICATE_MODEL"));
    }
}
