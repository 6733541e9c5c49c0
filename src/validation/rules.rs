//! Supplementary rule pass
//!
//! Rules are keyed by field name and apply to any field the record holds a
//! value for, whether or not the schema declares it. A field with rules but no
//! value is not checked; requiring a value is the schema's job.

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::coerce::{to_display_string, value_length, ValueKind};
use super::errors::{RuleError, RuleResult};
use super::verdict::{FieldError, FieldErrorKind};
use super::Record;

/// Uncompiled rule bundle as written in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldRuleSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

impl FieldRuleSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn regex(mut self, pattern: impl Into<String>) -> Self {
        self.regex = Some(pattern.into());
        self
    }
}

/// Compiled rule bundle for one field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    min_length: Option<usize>,
    max_length: Option<usize>,
    regex: Option<Regex>,
}

impl FieldRule {
    /// Compiles a rule spec for `field`.
    pub fn compile(field: &str, spec: &FieldRuleSpec) -> RuleResult<Self> {
        if let (Some(min), Some(max)) = (spec.min_length, spec.max_length) {
            if min > max {
                return Err(RuleError::InvalidBounds {
                    field: field.to_string(),
                    min,
                    max,
                });
            }
        }

        let regex = spec
            .regex
            .as_deref()
            .map(Regex::new)
            .transpose()
            .map_err(|e| RuleError::InvalidPattern {
                field: field.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            min_length: spec.min_length,
            max_length: spec.max_length,
            regex,
        })
    }

    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Source of the compiled pattern, if any
    pub fn pattern(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }

    fn has_length_bounds(&self) -> bool {
        self.min_length.is_some() || self.max_length.is_some()
    }

    /// Checks one present value against every constraint in the bundle.
    fn check(&self, model: &str, field: &str, value: &Value) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.has_length_bounds() {
            match value_length(value) {
                Some(len) => {
                    if let Some(min) = self.min_length.filter(|min| len < *min) {
                        errors.push(FieldError::new(
                            model,
                            field,
                            FieldErrorKind::MinLength,
                            format!("Field length must be at least {}, got {}", min, len),
                        ));
                    }
                    if let Some(max) = self.max_length.filter(|max| len > *max) {
                        errors.push(FieldError::new(
                            model,
                            field,
                            FieldErrorKind::MaxLength,
                            format!("Field length must be at most {}, got {}", max, len),
                        ));
                    }
                }
                None => errors.push(FieldError::new(
                    model,
                    field,
                    FieldErrorKind::MalformedRuleTarget,
                    format!(
                        "Length rule cannot apply to a value of type {}",
                        ValueKind::of(Some(value))
                    ),
                )),
            }
        }

        if let Some(regex) = &self.regex {
            if !regex.is_match(&to_display_string(value)) {
                errors.push(FieldError::new(
                    model,
                    field,
                    FieldErrorKind::Pattern,
                    format!("Field does not match pattern {}", regex.as_str()),
                ));
            }
        }

        errors
    }
}

/// Supplementary rules keyed by field name, in field name order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "BTreeMap<String, FieldRuleSpec>")]
pub struct RuleConfig {
    rules: BTreeMap<String, FieldRule>,
}

impl RuleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles and adds the rules for `field`, replacing any earlier ones.
    pub fn insert(&mut self, field: impl Into<String>, spec: &FieldRuleSpec) -> RuleResult<()> {
        let field = field.into();
        let rule = FieldRule::compile(&field, spec)?;
        self.rules.insert(field, rule);
        Ok(())
    }

    /// Builder form of [`RuleConfig::insert`].
    pub fn with(mut self, field: impl Into<String>, spec: FieldRuleSpec) -> RuleResult<Self> {
        self.insert(field, &spec)?;
        Ok(self)
    }

    pub fn get(&self, field: &str) -> Option<&FieldRule> {
        self.rules.get(field)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl TryFrom<BTreeMap<String, FieldRuleSpec>> for RuleConfig {
    type Error = RuleError;

    fn try_from(specs: BTreeMap<String, FieldRuleSpec>) -> RuleResult<Self> {
        let mut config = Self::new();
        for (field, spec) in &specs {
            config.insert(field.as_str(), spec)?;
        }
        Ok(config)
    }
}

/// Applies the configured rules to every field the record holds a value for.
///
/// Null counts as no value.
pub fn check_rules(model: &str, config: &RuleConfig, record: &Record) -> Vec<FieldError> {
    config
        .rules
        .iter()
        .filter_map(|(field, rule)| match record.get(field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(rule.check(model, field, value)),
        })
        .flatten()
        .collect()
}
