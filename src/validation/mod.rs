//! Validation engine
//!
//! Checks a candidate record against a model schema and reports which
//! required fields are missing and which fields hold invalid values.
//!
//! # Design Principles
//!
//! - Schemas are borrowed read-only; each call filters a private field list
//! - Required, type and rule passes are independent and may flag the same field
//! - Every record problem is collected; only an unknown model aborts
//! - Validation is deterministic and never mutates the record

mod coerce;
mod errors;
mod fields;
mod rules;
mod type_check;
mod validator;
mod verdict;

use serde_json::{Map, Value};

/// Candidate record: field name to runtime value.
pub type Record = Map<String, Value>;

pub use coerce::{
    is_numeric, is_truthy, is_valid_date, to_display_string, to_number, to_timestamp_ms, value_length,
    ValueKind,
};
pub use errors::{RuleError, RuleResult, ValidationError, ValidationResult};
pub use fields::{check_required, resolve_fields, OmitSet};
pub use rules::{check_rules, FieldRule, FieldRuleSpec, RuleConfig};
pub use type_check::{check_types, satisfies};
pub use validator::{validate, RecordValidator};
pub use verdict::{FieldError, FieldErrorKind, Verdict};
