//! Schema accessor seam
//!
//! The validation engine only ever reads schemas through this trait, so any
//! source (a schema file, a hand-written registry, ORM metadata) can back it.

use std::collections::{BTreeMap, HashMap};

use super::types::ModelSchema;

/// Read-only lookup from model name to its schema.
pub trait SchemaAccessor {
    /// Returns the schema for `model`, or `None` if no such model exists.
    fn model_fields(&self, model: &str) -> Option<&ModelSchema>;
}

impl SchemaAccessor for HashMap<String, ModelSchema> {
    fn model_fields(&self, model: &str) -> Option<&ModelSchema> {
        self.get(model)
    }
}

impl SchemaAccessor for BTreeMap<String, ModelSchema> {
    fn model_fields(&self, model: &str) -> Option<&ModelSchema> {
        self.get(model)
    }
}

impl<A: SchemaAccessor + ?Sized> SchemaAccessor for &A {
    fn model_fields(&self, model: &str) -> Option<&ModelSchema> {
        (**self).model_fields(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDescriptor;

    #[test]
    fn test_hash_map_accessor() {
        let mut models = HashMap::new();
        models.insert(
            "User".to_string(),
            ModelSchema::new("User", vec![FieldDescriptor::required("name", "String")]),
        );

        assert_eq!(models.model_fields("User").map(|m| m.fields.len()), Some(1));
        assert!(models.model_fields("user").is_none());
    }

    #[test]
    fn test_borrowed_accessor() {
        let mut models = BTreeMap::new();
        models.insert("Tag".to_string(), ModelSchema::new("Tag", Vec::new()));

        fn lookup<A: SchemaAccessor>(accessor: A) -> bool {
            accessor.model_fields("Tag").is_some()
        }
        assert!(lookup(&models));
    }
}
