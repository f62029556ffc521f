//! Schema invariant tests
//!
//! - Loading is strict: bad shape, reserved names, and mismatched defaults
//!   are rejected before any record is touched
//! - Validation is deterministic and never mutates its input
//! - Defaults fill omitted fields with values matching the declared type

use std::collections::BTreeMap;

use nxdb::dataset::Value;
use nxdb::schema::{FieldType, SchemaLoader, SchemaValidator, RESERVED_FIELD_NAMES};

const WORKSPACE_SCHEMA: &str = r#"{
    "criticality": {
        "type": "number",
        "description": "Business impact 1-10",
        "default": 1
    },
    "maintainers": {
        "type": "string[]",
        "description": "GitHub handles",
        "default": []
    },
    "deprecated": {
        "type": "boolean",
        "description": "Scheduled for removal",
        "default": false
    }
}"#;

fn loader() -> SchemaLoader {
    SchemaLoader::from_str(WORKSPACE_SCHEMA, "inline").unwrap()
}

#[test]
fn test_valid_schema_loads() {
    let loader = loader();
    assert_eq!(loader.schema().len(), 3);
    assert_eq!(
        loader.schema().entry("criticality").unwrap().field_type,
        FieldType::Number
    );
}

#[test]
fn test_every_reserved_name_is_rejected() {
    for name in RESERVED_FIELD_NAMES {
        let text = format!(
            r#"{{"{}": {{"type": "string", "description": "d", "default": ""}}}}"#,
            name
        );
        let err = SchemaLoader::from_str(&text, "inline").unwrap_err();
        assert_eq!(err.code().code(), "NX_RESERVED_FIELD", "name: {}", name);
    }
}

#[test]
fn test_unknown_type_tag_is_rejected() {
    let text = r#"{"f": {"type": "integer", "description": "d", "default": 0}}"#;
    let err = SchemaLoader::from_str(text, "inline").unwrap_err();
    assert_eq!(err.code().code(), "NX_SCHEMA_FORMAT");
}

#[test]
fn test_default_must_match_declared_type() {
    let text = r#"{"f": {"type": "number", "description": "d", "default": "zero"}}"#;
    let err = SchemaLoader::from_str(text, "inline").unwrap_err();
    assert_eq!(err.code().code(), "NX_TYPE_MISMATCH");
}

#[test]
fn test_empty_array_default_takes_declared_list_type() {
    let text = r#"{"ports": {"type": "number[]", "description": "d", "default": []}}"#;
    let loader = SchemaLoader::from_str(text, "inline").unwrap();
    assert_eq!(
        loader.schema().default_for("ports"),
        Some(&Value::NumList(Vec::new()))
    );
}

#[test]
fn test_validation_fills_defaults_without_mutating_input() {
    let loader = loader();
    let validator = SchemaValidator::new(loader.schema());

    let mut input = BTreeMap::new();
    input.insert("criticality".to_string(), Value::Num(8.0));

    let validated = validator.validate_fields(&input).unwrap();
    assert_eq!(validated["criticality"], Value::Num(8.0));
    assert_eq!(validated["maintainers"], Value::StrList(Vec::new()));
    assert_eq!(validated["deprecated"], Value::Bool(false));

    // Input untouched
    assert_eq!(input.len(), 1);
}

#[test]
fn test_validation_is_deterministic() {
    let loader = loader();
    let validator = SchemaValidator::new(loader.schema());

    let mut input = BTreeMap::new();
    input.insert(
        "maintainers".to_string(),
        Value::StrList(vec!["alice".into(), "bob".into()]),
    );

    let first = validator.validate_fields(&input).unwrap();
    for _ in 0..50 {
        assert_eq!(validator.validate_fields(&input).unwrap(), first);
    }
}

#[test]
fn test_undeclared_field_is_rejected() {
    let loader = loader();
    let validator = SchemaValidator::new(loader.schema());

    let mut input = BTreeMap::new();
    input.insert("velocity".to_string(), Value::Num(3.0));

    let err = validator.validate_fields(&input).unwrap_err();
    assert_eq!(err.code().code(), "NX_UNKNOWN_FIELD");
    assert_eq!(err.field(), Some("velocity"));
}

#[test]
fn test_wrong_value_type_is_rejected() {
    let loader = loader();
    let validator = SchemaValidator::new(loader.schema());

    let mut input = BTreeMap::new();
    input.insert("deprecated".to_string(), Value::from("yes"));

    let err = validator.validate_fields(&input).unwrap_err();
    assert_eq!(err.code().code(), "NX_TYPE_MISMATCH");
}
