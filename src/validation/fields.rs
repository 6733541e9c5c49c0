//! Field resolution and the required-field pass

use std::collections::BTreeSet;

use super::coerce::is_truthy;
use super::Record;
use crate::schema::{FieldDescriptor, ModelSchema};

/// Field names excluded from validation for one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OmitSet(BTreeSet<String>);

impl OmitSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>) -> bool {
        self.0.insert(field.into())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for OmitSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for OmitSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

/// Returns the fields to validate: schema order, minus omitted and relation fields.
///
/// Builds a new list on every call; the schema itself is only borrowed.
pub fn resolve_fields<'s>(schema: &'s ModelSchema, omit: &OmitSet) -> Vec<&'s FieldDescriptor> {
    schema
        .fields
        .iter()
        .filter(|field| !omit.contains(&field.name))
        .filter(|field| !field.is_relation)
        .collect()
}

/// Returns required fields whose value is falsy, in schema order.
///
/// Absent, null, `false`, `0` and `""` all count as missing.
pub fn check_required(fields: &[&FieldDescriptor], record: &Record) -> Vec<String> {
    fields
        .iter()
        .filter(|field| field.required)
        .filter(|field| !is_truthy(record.get(&field.name)))
        .map(|field| field.name.clone())
        .collect()
}
