//! Custom-field validation
//!
//! Reconciles a record's declared custom fields against the loaded schema:
//! every key must be declared, every value must match its declared type, and
//! schema keys the record omits are filled with the schema default. The
//! input mapping is never mutated; callers receive a fresh copy.

use std::collections::BTreeMap;

use crate::dataset::Value;

use super::errors::{SchemaError, SchemaResult};
use super::types::Schema;

/// Validates record custom fields against a schema.
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a validator backed by the given schema.
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validates a field mapping and returns a completed copy.
    ///
    /// # Errors
    ///
    /// - `NX_UNKNOWN_FIELD` if a key is not declared in the schema
    /// - `NX_TYPE_MISMATCH` if a value's shape disagrees with its declaration
    pub fn validate_fields(
        &self,
        fields: &BTreeMap<String, Value>,
    ) -> SchemaResult<BTreeMap<String, Value>> {
        let mut validated = BTreeMap::new();

        for (key, value) in fields {
            let entry = self
                .schema
                .entry(key)
                .ok_or_else(|| SchemaError::unknown_field(key))?;

            if !entry.field_type.matches(value) {
                return Err(SchemaError::type_mismatch(
                    key,
                    entry.field_type.as_str(),
                    value.type_name(),
                ));
            }

            validated.insert(key.clone(), value.clone());
        }

        // Fill schema keys the record omits with their defaults.
        for (key, entry) in self.schema.iter() {
            if !validated.contains_key(key) {
                validated.insert(key.to_string(), entry.default.clone());
            }
        }

        Ok(validated)
    }
}

#[cfg(test)]
mod tests {
    use super::super::loader::SchemaLoader;
    use super::*;

    fn sample_schema() -> Schema {
        SchemaLoader::from_str(
            r#"{
                "owner": {
                    "type": "string",
                    "description": "Owning team",
                    "default": "unknown"
                },
                "criticality": {
                    "type": "number",
                    "description": "1 (low) to 5 (high)",
                    "default": 3
                },
                "maintainers": {
                    "type": "string[]",
                    "description": "GitHub handles",
                    "default": []
                }
            }"#,
            "<test>",
        )
        .unwrap()
        .schema()
        .clone()
    }

    #[test]
    fn test_empty_fields_filled_with_defaults() {
        let schema = sample_schema();
        let validator = SchemaValidator::new(&schema);

        let validated = validator.validate_fields(&BTreeMap::new()).unwrap();
        assert_eq!(validated.get("owner"), Some(&Value::from("unknown")));
        assert_eq!(validated.get("criticality"), Some(&Value::Num(3.0)));
        assert_eq!(
            validated.get("maintainers"),
            Some(&Value::StrList(Vec::new()))
        );
    }

    #[test]
    fn test_declared_values_kept() {
        let schema = sample_schema();
        let validator = SchemaValidator::new(&schema);

        let mut fields = BTreeMap::new();
        fields.insert("owner".to_string(), Value::from("platform-team"));

        let validated = validator.validate_fields(&fields).unwrap();
        assert_eq!(validated.get("owner"), Some(&Value::from("platform-team")));
        // Omitted keys still filled
        assert_eq!(validated.get("criticality"), Some(&Value::Num(3.0)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let schema = sample_schema();
        let validator = SchemaValidator::new(&schema);

        let mut fields = BTreeMap::new();
        fields.insert("budget".to_string(), Value::Num(10.0));

        let err = validator.validate_fields(&fields).unwrap_err();
        assert_eq!(err.code().code(), "NX_UNKNOWN_FIELD");
        assert_eq!(err.field(), Some("budget"));
    }

    #[test]
    fn test_scalar_type_mismatch_rejected() {
        let schema = sample_schema();
        let validator = SchemaValidator::new(&schema);

        let mut fields = BTreeMap::new();
        fields.insert("owner".to_string(), Value::Num(42.0));

        let err = validator.validate_fields(&fields).unwrap_err();
        assert_eq!(err.code().code(), "NX_TYPE_MISMATCH");
        assert!(err.message().contains("string"));
    }

    #[test]
    fn test_list_element_type_mismatch_rejected() {
        let schema = sample_schema();
        let validator = SchemaValidator::new(&schema);

        let mut fields = BTreeMap::new();
        fields.insert("maintainers".to_string(), Value::NumList(vec![1.0]));

        let err = validator.validate_fields(&fields).unwrap_err();
        assert_eq!(err.code().code(), "NX_TYPE_MISMATCH");
    }

    #[test]
    fn test_input_not_mutated() {
        let schema = sample_schema();
        let validator = SchemaValidator::new(&schema);

        let fields = BTreeMap::new();
        let _ = validator.validate_fields(&fields).unwrap();
        assert!(fields.is_empty());
    }
}
