//! Verdict aggregation
//!
//! A verdict is the single result of a validation call. Field errors keep
//! every violated constraint; the invalid name list holds each field once.

use serde::Serialize;
use std::fmt;

/// Kind of a collected field error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// Value does not satisfy the declared type
    TypeMismatch,
    /// Value is shorter than `minLength`
    MinLength,
    /// Value is longer than `maxLength`
    MaxLength,
    /// String form does not match `regex`
    Pattern,
    /// Length rule applied to a value without a length
    MalformedRuleTarget,
}

/// One violated constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub model: String,
    pub field_name: String,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(
        model: impl Into<String>,
        field_name: impl Into<String>,
        kind: FieldErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            field_name: field_name.into(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: {}", self.model, self.field_name, self.message)
    }
}

/// Result of validating one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Every violated type or rule constraint
    pub invalid_fields: Vec<FieldError>,
    /// Names of invalid fields, first-failure order, no duplicates
    pub invalid_field_names: Vec<String>,
    /// Required fields without a value, in schema order
    pub missing_fields: Vec<String>,
    /// Human-readable summary, empty when valid
    pub error_summary: String,
    pub is_valid: bool,
}

impl Verdict {
    /// Aggregates the results of the individual passes.
    pub fn aggregate(missing_fields: Vec<String>, invalid_fields: Vec<FieldError>) -> Self {
        let mut invalid_field_names: Vec<String> = Vec::new();
        for error in &invalid_fields {
            if !invalid_field_names.contains(&error.field_name) {
                invalid_field_names.push(error.field_name.clone());
            }
        }

        let error_summary = summarize(&missing_fields, &invalid_field_names);
        let is_valid = error_summary.is_empty();

        Self {
            invalid_fields,
            invalid_field_names,
            missing_fields,
            error_summary,
            is_valid,
        }
    }

    /// Returns the errors collected for one field.
    pub fn errors_for<'a>(&'a self, field_name: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.invalid_fields
            .iter()
            .filter(move |e| e.field_name == field_name)
    }
}

fn summarize(missing_fields: &[String], invalid_field_names: &[String]) -> String {
    let mut summary = String::new();
    if !missing_fields.is_empty() {
        summary.push_str(&format!(
            "The following required field(s) are missing: {}.",
            missing_fields.join(", ")
        ));
    }
    if !invalid_field_names.is_empty() {
        summary.push_str(&format!(
            " --- Validation failed for the following field(s): {}",
            invalid_field_names.join(", ")
        ));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_error(field: &str) -> FieldError {
        FieldError::new("User", field, FieldErrorKind::TypeMismatch, "bad type")
    }

    #[test]
    fn test_empty_verdict_is_valid() {
        let verdict = Verdict::aggregate(Vec::new(), Vec::new());
        assert!(verdict.is_valid);
        assert!(verdict.error_summary.is_empty());
    }

    #[test]
    fn test_names_deduplicated_in_order() {
        let errors = vec![
            type_error("bio"),
            type_error("age"),
            FieldError::new("User", "bio", FieldErrorKind::MaxLength, "too long"),
        ];
        let verdict = Verdict::aggregate(Vec::new(), errors);

        assert_eq!(verdict.invalid_field_names, vec!["bio", "age"]);
        assert_eq!(verdict.invalid_fields.len(), 3);
        assert_eq!(verdict.errors_for("bio").count(), 2);
        assert!(!verdict.is_valid);
    }

    #[test]
    fn test_summary_lists_missing_then_invalid() {
        let verdict = Verdict::aggregate(
            vec!["a".into(), "b".into()],
            vec![type_error("c"), type_error("d")],
        );
        assert_eq!(
            verdict.error_summary,
            "The following required field(s) are missing: a, b. --- Validation failed for the following field(s): c, d"
        );
    }

    #[test]
    fn test_missing_only_is_invalid() {
        let verdict = Verdict::aggregate(vec!["age".into()], Vec::new());
        assert!(!verdict.is_valid);
        assert!(verdict.invalid_field_names.is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let verdict = Verdict::aggregate(Vec::new(), vec![type_error("age")]);
        let value = serde_json::to_value(&verdict).unwrap();
        assert_eq!(value["isValid"], false);
        assert_eq!(value["invalidFieldNames"][0], "age");
        assert_eq!(value["invalidFields"][0]["fieldName"], "age");
        assert_eq!(value["invalidFields"][0]["kind"], "type_mismatch");
    }
}
