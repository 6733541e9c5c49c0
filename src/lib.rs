//! recordcheck - a schema-driven record validator
//!
//! Given a model schema (field names, declared types, required-ness) and a
//! candidate record, reports which required fields are missing and which
//! fields hold values of the wrong type or break supplementary rules.
//!
//! ```
//! use recordcheck::schema::{FieldDescriptor, ModelSchema, SchemaRegistry};
//! use recordcheck::validation::{OmitSet, RecordValidator, RuleConfig};
//! use serde_json::json;
//!
//! let mut registry = SchemaRegistry::new();
//! registry
//!     .register(ModelSchema::new(
//!         "User",
//!         vec![
//!             FieldDescriptor::required("name", "String"),
//!             FieldDescriptor::required("age", "Int"),
//!         ],
//!     ))
//!     .unwrap();
//!
//! let record = json!({ "name": "Jo" });
//! let verdict = RecordValidator::new(&registry)
//!     .validate("User", record.as_object().unwrap(), &OmitSet::new(), &RuleConfig::new())
//!     .unwrap();
//!
//! assert_eq!(verdict.missing_fields, vec!["age"]);
//! assert!(!verdict.is_valid);
//! ```

pub mod cli;
pub mod schema;
pub mod validation;
