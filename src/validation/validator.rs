//! Record validator entry point
//!
//! Validation runs in four steps over a private field list:
//! - resolve the schema's fields, minus omitted and relation fields
//! - required pass over the resolved fields
//! - type pass over the resolved fields
//! - rule pass over the rule configuration
//!
//! Every finding is collected into one verdict. Only an unknown model name
//! stops the call early.

use tracing::{debug, warn};

use super::errors::{ValidationError, ValidationResult};
use super::fields::{check_required, resolve_fields, OmitSet};
use super::rules::{check_rules, RuleConfig};
use super::type_check::check_types;
use super::verdict::Verdict;
use super::Record;
use crate::schema::SchemaAccessor;

/// Validator that checks records against schemas from an accessor.
///
/// Holds no state besides the accessor borrow, so one validator can serve
/// any number of calls, including concurrent ones when `A: Sync`.
pub struct RecordValidator<'a, A: SchemaAccessor + ?Sized> {
    accessor: &'a A,
}

impl<'a, A: SchemaAccessor + ?Sized> RecordValidator<'a, A> {
    /// Creates a new validator backed by the given schema accessor.
    pub fn new(accessor: &'a A) -> Self {
        Self { accessor }
    }

    /// Validates a record against the named model.
    ///
    /// # Arguments
    ///
    /// * `model` - The model name to look up
    /// * `record` - The candidate record
    /// * `omit` - Field names to leave out of the required and type passes
    /// * `rules` - Supplementary per-field rules
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ModelNotFound` if the accessor has no schema
    /// for `model`. Every other problem is reported in the verdict.
    pub fn validate(
        &self,
        model: &str,
        record: &Record,
        omit: &OmitSet,
        rules: &RuleConfig,
    ) -> ValidationResult<Verdict> {
        validate(self.accessor, model, record, omit, rules)
    }
}

/// Validates `record` against `model` as supplied by `accessor`.
///
/// See [`RecordValidator::validate`].
pub fn validate<A: SchemaAccessor + ?Sized>(
    accessor: &A,
    model: &str,
    record: &Record,
    omit: &OmitSet,
    rules: &RuleConfig,
) -> ValidationResult<Verdict> {
    let schema = accessor.model_fields(model).ok_or_else(|| {
        warn!(model, "model not found in schema");
        ValidationError::model_not_found(model)
    })?;

    let fields = resolve_fields(schema, omit);

    let missing_fields = check_required(&fields, record);
    let mut invalid_fields = check_types(model, &fields, record);
    debug!(
        model,
        resolved = fields.len(),
        missing = missing_fields.len(),
        type_errors = invalid_fields.len(),
        "schema passes complete"
    );

    let rule_errors = check_rules(model, rules, record);
    debug!(model, rules = rules.len(), rule_errors = rule_errors.len(), "rule pass complete");
    invalid_fields.extend(rule_errors);

    Ok(Verdict::aggregate(missing_fields, invalid_fields))
}
