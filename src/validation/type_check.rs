//! Type pass: dispatch on the declared type tag of each resolved field

use serde_json::Value;

use super::coerce::{is_numeric, is_valid_date, ValueKind};
use super::verdict::{FieldError, FieldErrorKind};
use super::Record;
use crate::schema::{FieldDescriptor, TypeTag};

/// Whether a (possibly absent) value satisfies a declared type.
///
/// Numeric tags accept anything that coerces to a number, date tags anything
/// that constructs a valid date. Every other tag must equal the value's
/// runtime kind.
pub fn satisfies(tag: &TypeTag, value: Option<&Value>) -> bool {
    match tag {
        TypeTag::Int | TypeTag::Float => is_numeric(value),
        TypeTag::Date | TypeTag::DateTime => is_valid_date(value),
        TypeTag::String => ValueKind::of(value) == ValueKind::String,
        TypeTag::Boolean => ValueKind::of(value) == ValueKind::Boolean,
        TypeTag::Other(name) => ValueKind::of(value).name() == name,
    }
}

/// Checks every resolved field, present or not, against its declared type.
pub fn check_types(model: &str, fields: &[&FieldDescriptor], record: &Record) -> Vec<FieldError> {
    fields
        .iter()
        .filter_map(|field| {
            let value = record.get(&field.name);
            if satisfies(&field.declared_type, value) {
                return None;
            }
            Some(FieldError::new(
                model,
                &field.name,
                FieldErrorKind::TypeMismatch,
                format!(
                    "Field has incorrect type. Expected {}, got {}",
                    field.declared_type,
                    ValueKind::of(value)
                ),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_tags() {
        assert!(satisfies(&TypeTag::Int, Some(&json!(3))));
        assert!(satisfies(&TypeTag::Int, Some(&json!("42"))));
        assert!(satisfies(&TypeTag::Float, Some(&json!(2.5))));
        assert!(!satisfies(&TypeTag::Int, Some(&json!("abc"))));
        assert!(!satisfies(&TypeTag::Float, Some(&json!({"v": 1}))));
        assert!(!satisfies(&TypeTag::Int, None));
    }

    #[test]
    fn test_date_tags() {
        assert!(satisfies(&TypeTag::DateTime, Some(&json!("2024-01-01T00:00:00Z"))));
        assert!(satisfies(&TypeTag::Date, Some(&json!("2024-01-01"))));
        assert!(!satisfies(&TypeTag::DateTime, Some(&json!("yesterday"))));
        assert!(!satisfies(&TypeTag::Date, None));
    }

    #[test]
    fn test_kind_tags() {
        assert!(satisfies(&TypeTag::String, Some(&json!("x"))));
        assert!(!satisfies(&TypeTag::String, Some(&json!(1))));
        assert!(satisfies(&TypeTag::Boolean, Some(&json!(false))));
        assert!(!satisfies(&TypeTag::Boolean, Some(&json!("true"))));
        assert!(satisfies(&TypeTag::parse("Object"), Some(&json!({"a": 1}))));
        assert!(!satisfies(&TypeTag::parse("Json"), Some(&json!({"a": 1}))));
    }

    #[test]
    fn test_null_is_an_object() {
        assert!(satisfies(&TypeTag::parse("Object"), Some(&json!(null))));
        assert!(!satisfies(&TypeTag::String, Some(&json!(null))));

        let bio = FieldDescriptor::optional("bio", "String");
        let record = json!({ "bio": null });
        let errors = check_types("User", &[&bio], record.as_object().unwrap());
        assert_eq!(
            errors[0].message,
            "Field has incorrect type. Expected string, got object"
        );
    }

    #[test]
    fn test_absent_field_is_type_checked() {
        let name = FieldDescriptor::optional("name", "String");
        let record = Record::new();

        let errors = check_types("User", &[&name], &record);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, FieldErrorKind::TypeMismatch);
        assert_eq!(
            errors[0].message,
            "Field has incorrect type. Expected string, got undefined"
        );
    }

    #[test]
    fn test_one_error_per_failing_field() {
        let fields = [
            FieldDescriptor::required("name", "String"),
            FieldDescriptor::required("age", "Int"),
            FieldDescriptor::required("active", "Boolean"),
        ];
        let refs: Vec<&FieldDescriptor> = fields.iter().collect();
        let record = json!({ "name": "Jo", "age": "abc", "active": 1 });

        let errors = check_types("User", &refs, record.as_object().unwrap());
        let failed: Vec<&str> = errors.iter().map(|e| e.field_name.as_str()).collect();
        assert_eq!(failed, vec!["age", "active"]);
        assert_eq!(errors[0].model, "User");
        assert!(errors[0].message.contains("Expected int, got string"));
        assert!(errors[1].message.contains("Expected boolean, got number"));
    }
}
