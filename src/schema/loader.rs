//! Schema loader
//!
//! Reads the schema document (`.nxdb.schema.json`) once at startup and
//! validates it field by field before anything else touches it:
//!
//! - the document must be a JSON object
//! - every entry must be an object carrying `type`, `description`, `default`
//! - `type` must be one of the six recognized tags
//! - field names must not collide with the fixed record attributes
//! - each `default` must match its declared `type` exactly
//!
//! The loaded [`Schema`] is immutable for the process lifetime; the loader
//! is constructed once and passed by reference to callers.

use std::fs;
use std::path::Path;

use crate::dataset::Value;

use super::errors::{SchemaError, SchemaResult};
use super::types::{FieldType, Schema, SchemaEntry};

/// Default schema file name, resolved against the working directory.
pub const SCHEMA_FILE: &str = ".nxdb.schema.json";

/// Fixed record attribute names; custom fields must not shadow them.
pub const RESERVED_FIELD_NAMES: [&str; 8] = [
    "name",
    "root",
    "customFields",
    "tags",
    "targetNames",
    "targets",
    "dependencies",
    "dependedByProjects",
];

/// Loads and owns the validated custom-field schema.
#[derive(Debug)]
pub struct SchemaLoader {
    schema: Schema,
}

impl SchemaLoader {
    /// Loads the schema from a file.
    pub fn from_file(path: &Path) -> SchemaResult<Self> {
        let origin = path.display().to_string();
        let text = fs::read_to_string(path)
            .map_err(|e| SchemaError::format(&origin, format!("failed to read file: {}", e)))?;
        Self::from_str(&text, &origin)
    }

    /// Loads the schema from JSON text. `origin` names the source in errors.
    pub fn from_str(text: &str, origin: &str) -> SchemaResult<Self> {
        let document: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| SchemaError::format(origin, format!("invalid JSON: {}", e)))?;

        let object = document
            .as_object()
            .ok_or_else(|| SchemaError::format(origin, "expected an object"))?;

        let mut schema = Schema::new();
        for (name, entry) in object {
            if RESERVED_FIELD_NAMES.contains(&name.as_str()) {
                return Err(SchemaError::reserved_field(name));
            }
            let entry = parse_entry(origin, name, entry)?;
            schema.insert(name, entry);
        }

        Ok(Self { schema })
    }

    /// Returns the loaded schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

fn parse_entry(origin: &str, name: &str, raw: &serde_json::Value) -> SchemaResult<SchemaEntry> {
    let object = raw.as_object().ok_or_else(|| {
        SchemaError::format(origin, format!("entry for \"{}\" must be an object", name))
    })?;

    for required in ["type", "description", "default"] {
        if !object.contains_key(required) {
            return Err(SchemaError::format(
                origin,
                format!("entry for \"{}\" is missing \"{}\"", name, required),
            ));
        }
    }

    let tag = object["type"].as_str().ok_or_else(|| {
        SchemaError::format(origin, format!("type of \"{}\" must be a string", name))
    })?;
    let field_type = FieldType::parse(tag).ok_or_else(|| {
        SchemaError::format(origin, format!("invalid type \"{}\" for \"{}\"", tag, name))
    })?;

    let description = object["description"].as_str().ok_or_else(|| {
        SchemaError::format(
            origin,
            format!("description of \"{}\" must be a string", name),
        )
    })?;

    // Mixed-type arrays fail the conversion to a homogeneous list value,
    // which covers the per-element check for array-typed defaults.
    let mut default: Value = serde_json::from_value(object["default"].clone())
        .map_err(|_| SchemaError::default_mismatch(name, field_type.as_str()))?;

    if !field_type.matches(&default) {
        return Err(SchemaError::default_mismatch(name, field_type.as_str()));
    }

    // An empty array carries no element type; pin it to the declared one.
    if default.sequence_is_empty() {
        if let Some(empty) = field_type.empty_list() {
            default = empty;
        }
    }

    Ok(SchemaEntry::new(field_type, description, default))
}
