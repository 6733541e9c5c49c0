//! Schema type definitions
//!
//! A model schema is an ordered list of field descriptors. Declared types are
//! case-insensitive tags; the common ones are a closed set and everything else
//! (Json, Decimal, enum names, ...) is carried through as `Other`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeTag {
    /// Integer number
    Int,
    /// Floating point number
    Float,
    /// UTF-8 string
    String,
    /// Boolean
    Boolean,
    /// Calendar date
    Date,
    /// Date and time
    DateTime,
    /// Any other tag, stored lowercased
    Other(String),
}

impl TypeTag {
    /// Parses a tag case-insensitively. Never fails.
    pub fn parse(tag: &str) -> Self {
        let lowered = tag.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "int" => TypeTag::Int,
            "float" => TypeTag::Float,
            "string" => TypeTag::String,
            "boolean" => TypeTag::Boolean,
            "date" => TypeTag::Date,
            "datetime" => TypeTag::DateTime,
            _ => TypeTag::Other(lowered),
        }
    }

    /// Returns the lowercase tag name used in error messages.
    pub fn name(&self) -> &str {
        match self {
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::String => "string",
            TypeTag::Boolean => "boolean",
            TypeTag::Date => "date",
            TypeTag::DateTime => "datetime",
            TypeTag::Other(name) => name,
        }
    }
}

impl From<String> for TypeTag {
    fn from(tag: String) -> Self {
        TypeTag::parse(&tag)
    }
}

impl From<&str> for TypeTag {
    fn from(tag: &str) -> Self {
        TypeTag::parse(tag)
    }
}

impl From<TypeTag> for String {
    fn from(tag: TypeTag) -> Self {
        tag.name().to_string()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field descriptor as supplied by a schema accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawFieldDescriptor")]
pub struct FieldDescriptor {
    /// Field name as it appears in records
    pub name: String,
    /// Declared type
    #[serde(rename = "type")]
    pub declared_type: TypeTag,
    /// Whether the field must hold a value
    pub required: bool,
    /// Relation fields point at other models and are never validated
    pub is_relation: bool,
}

/// Wire form accepted for field descriptors.
///
/// Accepts both the plain keys and the `isRequired` / `relationName` keys
/// found in ORM metadata dumps.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFieldDescriptor {
    name: String,
    #[serde(rename = "type")]
    declared_type: TypeTag,
    #[serde(default, alias = "isRequired")]
    required: bool,
    #[serde(default)]
    is_relation: Option<bool>,
    #[serde(default)]
    relation_name: Option<String>,
}

impl From<RawFieldDescriptor> for FieldDescriptor {
    fn from(raw: RawFieldDescriptor) -> Self {
        Self {
            name: raw.name,
            declared_type: raw.declared_type,
            required: raw.required,
            is_relation: raw
                .is_relation
                .unwrap_or_else(|| raw.relation_name.map_or(false, |n| !n.is_empty())),
        }
    }
}

impl FieldDescriptor {
    /// Create a field descriptor
    pub fn new(name: impl Into<String>, declared_type: impl Into<TypeTag>, required: bool) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            required,
            is_relation: false,
        }
    }

    /// Create a required field
    pub fn required(name: impl Into<String>, declared_type: impl Into<TypeTag>) -> Self {
        Self::new(name, declared_type, true)
    }

    /// Create an optional field
    pub fn optional(name: impl Into<String>, declared_type: impl Into<TypeTag>) -> Self {
        Self::new(name, declared_type, false)
    }

    /// Create a relation field pointing at another model
    pub fn relation(name: impl Into<String>, target_model: impl Into<TypeTag>, required: bool) -> Self {
        Self {
            is_relation: true,
            ..Self::new(name, target_model, required)
        }
    }
}

/// Ordered field list for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSchema {
    /// Model name
    pub name: String,
    /// Field descriptors in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl ModelSchema {
    /// Create a new model schema
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_tag_is_case_insensitive() {
        assert_eq!(TypeTag::parse("Int"), TypeTag::Int);
        assert_eq!(TypeTag::parse("FLOAT"), TypeTag::Float);
        assert_eq!(TypeTag::parse("DateTime"), TypeTag::DateTime);
        assert_eq!(TypeTag::parse("Boolean"), TypeTag::Boolean);
        assert_eq!(TypeTag::parse("Json"), TypeTag::Other("json".into()));
    }

    #[test]
    fn test_type_tag_names() {
        assert_eq!(TypeTag::String.name(), "string");
        assert_eq!(TypeTag::DateTime.name(), "datetime");
        assert_eq!(TypeTag::Other("decimal".into()).to_string(), "decimal");
    }

    #[test]
    fn test_descriptor_from_plain_json() {
        let field: FieldDescriptor = serde_json::from_value(json!({
            "name": "age",
            "type": "Int",
            "required": true
        }))
        .unwrap();

        assert_eq!(field, FieldDescriptor::required("age", "int"));
    }

    #[test]
    fn test_descriptor_from_orm_metadata() {
        let field: FieldDescriptor = serde_json::from_value(json!({
            "name": "author",
            "type": "User",
            "isRequired": true,
            "relationName": "PostToUser"
        }))
        .unwrap();

        assert!(field.required);
        assert!(field.is_relation);
        assert_eq!(field.declared_type, TypeTag::Other("user".into()));
    }

    #[test]
    fn test_empty_relation_name_is_not_a_relation() {
        let field: FieldDescriptor = serde_json::from_value(json!({
            "name": "authorId",
            "type": "Int",
            "relationName": ""
        }))
        .unwrap();
        assert!(!field.is_relation);

        let field: FieldDescriptor = serde_json::from_value(json!({
            "name": "authorId",
            "type": "Int",
            "relationName": null
        }))
        .unwrap();
        assert!(!field.is_relation);
    }

    #[test]
    fn test_explicit_is_relation_wins() {
        let field: FieldDescriptor = serde_json::from_value(json!({
            "name": "authorId",
            "type": "Int",
            "isRelation": false,
            "relationName": "PostToUser"
        }))
        .unwrap();

        assert!(!field.is_relation);
        assert!(!field.required);
    }

    #[test]
    fn test_descriptor_serializes_lowercase_tag() {
        let value = serde_json::to_value(FieldDescriptor::relation("posts", "Post", false)).unwrap();
        assert_eq!(value["type"], "post");
        assert_eq!(value["isRelation"], true);

        let back: FieldDescriptor = serde_json::from_value(value).unwrap();
        assert!(back.is_relation);
    }

    #[test]
    fn test_model_field_lookup() {
        let model = ModelSchema::new(
            "User",
            vec![
                FieldDescriptor::required("name", "String"),
                FieldDescriptor::optional("age", "Int"),
            ],
        );
        assert_eq!(model.field("age").map(|f| f.required), Some(false));
        assert!(model.field("email").is_none());
    }
}
