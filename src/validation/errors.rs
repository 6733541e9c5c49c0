//! Validation error types
//!
//! Only an unknown model aborts a validation call. Every other problem with a
//! record is collected into the verdict. Rule configuration problems are
//! reported when the rules are built, before any record is seen.

use thiserror::Error;

/// Result type for validation calls
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Unrecoverable validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Model {model} not found in schema")]
    ModelNotFound { model: String },
}

impl ValidationError {
    /// Create a model-not-found error
    pub fn model_not_found(model: impl Into<String>) -> Self {
        ValidationError::ModelNotFound {
            model: model.into(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::ModelNotFound { .. } => "RECORDCHECK_MODEL_NOT_FOUND",
        }
    }
}

/// Result type for rule construction
pub type RuleResult<T> = Result<T, RuleError>;

/// Invalid supplementary rule configuration
#[derive(Debug, Clone, Error)]
pub enum RuleError {
    #[error("Invalid pattern for field '{field}': {reason}")]
    InvalidPattern { field: String, reason: String },

    #[error("Invalid length bounds for field '{field}': minLength {min} exceeds maxLength {max}")]
    InvalidBounds { field: String, min: usize, max: usize },
}

impl RuleError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            RuleError::InvalidPattern { .. } => "RECORDCHECK_INVALID_PATTERN",
            RuleError::InvalidBounds { .. } => "RECORDCHECK_INVALID_BOUNDS",
        }
    }
}
