//! Schema type definitions
//!
//! A schema declares the custom fields records may carry: for each field a
//! type tag, a human description, and a default used when a record omits the
//! field. Six type tags exist: the three scalars and their list forms.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dataset::Value;

/// Declared field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "string[]")]
    StringList,
    #[serde(rename = "number[]")]
    NumberList,
    #[serde(rename = "boolean[]")]
    BooleanList,
}

impl FieldType {
    /// All recognized type tags.
    pub const ALL: [FieldType; 6] = [
        FieldType::String,
        FieldType::Number,
        FieldType::Boolean,
        FieldType::StringList,
        FieldType::NumberList,
        FieldType::BooleanList,
    ];

    /// Returns the type tag as written in schema files.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::StringList => "string[]",
            FieldType::NumberList => "number[]",
            FieldType::BooleanList => "boolean[]",
        }
    }

    /// Parses a type tag.
    pub fn parse(tag: &str) -> Option<FieldType> {
        FieldType::ALL.iter().copied().find(|t| t.as_str() == tag)
    }

    /// Returns true if a value's runtime shape matches this declared type.
    ///
    /// List values are homogeneous by construction, so matching the list
    /// shape implies every element matches the declared element type. An
    /// empty list carries no element type and matches any list-typed field.
    pub fn matches(&self, value: &Value) -> bool {
        if self.is_list() && value.is_sequence() && value.sequence_is_empty() {
            return true;
        }
        matches!(
            (self, value),
            (FieldType::String, Value::Str(_))
                | (FieldType::Number, Value::Num(_))
                | (FieldType::Boolean, Value::Bool(_))
                | (FieldType::StringList, Value::StrList(_))
                | (FieldType::NumberList, Value::NumList(_))
                | (FieldType::BooleanList, Value::BoolList(_))
        )
    }

    /// Returns true for the three list-typed tags.
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            FieldType::StringList | FieldType::NumberList | FieldType::BooleanList
        )
    }

    /// Returns the canonical empty value for a list type, if this is one.
    pub fn empty_list(&self) -> Option<Value> {
        match self {
            FieldType::StringList => Some(Value::StrList(Vec::new())),
            FieldType::NumberList => Some(Value::NumList(Vec::new())),
            FieldType::BooleanList => Some(Value::BoolList(Vec::new())),
            _ => None,
        }
    }
}

/// One schema entry: type, description, default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaEntry {
    /// Declared field type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Human-readable description
    pub description: String,
    /// Value used when a record omits the field; must match `field_type`
    pub default: Value,
}

impl SchemaEntry {
    pub fn new(field_type: FieldType, description: impl Into<String>, default: Value) -> Self {
        Self {
            field_type,
            description: description.into(),
            default,
        }
    }
}

/// The custom-field schema: field name to entry, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    entries: BTreeMap<String, SchemaEntry>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry. Used by the loader after validation.
    pub(crate) fn insert(&mut self, name: impl Into<String>, entry: SchemaEntry) {
        self.entries.insert(name.into(), entry);
    }

    /// Looks up an entry by field name.
    pub fn entry(&self, name: &str) -> Option<&SchemaEntry> {
        self.entries.get(name)
    }

    /// Returns the default value for a field, if declared.
    pub fn default_for(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).map(|entry| &entry.default)
    }

    /// Iterates entries in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
