//! Project records and the dataset map
//!
//! A record is one tracked project. Fixed attributes come from the project
//! graph; custom fields are user-declared and schema-validated. Flattening
//! merges both into a single field namespace so filtering and projection use
//! one lookup path.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value::Value;

/// A flattened record: one namespace of field name to value.
///
/// Key order is deterministic (sorted), which keeps result serialization and
/// error messages stable across runs.
pub type Row = BTreeMap<String, Value>;

/// One tracked project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique project name (primary key of the dataset)
    pub name: String,
    /// Project root path
    pub root: String,
    /// Project type tag (e.g. "lib", "app")
    #[serde(rename = "type")]
    pub project_type: String,
    /// Source root, when the project declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    /// Ordered tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Target names
    #[serde(default)]
    pub targets: Vec<String>,
    /// Names of projects this record depends on (deduplicated)
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Names of projects depending on this record
    #[serde(default)]
    pub depended_by_projects: Vec<String>,
    /// User-declared custom fields
    #[serde(default)]
    pub custom_fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a record with the given name and root and empty attributes.
    pub fn new(name: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            project_type: String::new(),
            source_root: None,
            tags: Vec::new(),
            targets: Vec::new(),
            dependencies: Vec::new(),
            depended_by_projects: Vec::new(),
            custom_fields: BTreeMap::new(),
        }
    }

    /// Sets the project type tag.
    pub fn with_type(mut self, project_type: impl Into<String>) -> Self {
        self.project_type = project_type.into();
        self
    }

    /// Sets the source root.
    pub fn with_source_root(mut self, source_root: impl Into<String>) -> Self {
        self.source_root = Some(source_root.into());
        self
    }

    /// Sets the tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the targets.
    pub fn with_targets(mut self, targets: Vec<String>) -> Self {
        self.targets = targets;
        self
    }

    /// Sets the dependencies.
    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// Adds a custom field.
    pub fn with_custom_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.custom_fields.insert(key.into(), value);
        self
    }

    /// Flattens the record into a single field namespace.
    ///
    /// Fixed attributes and custom fields land side by side; `sourceRoot`
    /// appears only when the project declares one. Custom field names cannot
    /// collide with fixed attributes (the schema rejects reserved names).
    pub fn flatten(&self) -> Row {
        let mut row = Row::new();
        row.insert("name".into(), Value::Str(self.name.clone()));
        row.insert("type".into(), Value::Str(self.project_type.clone()));
        row.insert("root".into(), Value::Str(self.root.clone()));
        if let Some(source_root) = &self.source_root {
            row.insert("sourceRoot".into(), Value::Str(source_root.clone()));
        }
        row.insert("tags".into(), Value::StrList(self.tags.clone()));
        row.insert("targets".into(), Value::StrList(self.targets.clone()));
        row.insert(
            "dependencies".into(),
            Value::StrList(self.dependencies.clone()),
        );
        row.insert(
            "dependedByProjects".into(),
            Value::StrList(self.depended_by_projects.clone()),
        );
        for (key, value) in &self.custom_fields {
            row.insert(key.clone(), value.clone());
        }
        row
    }
}

/// The dataset: project name to record.
///
/// Backed by a sorted map so iteration order is deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: BTreeMap<String, Record>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dataset from records, keyed by record name.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.name.clone(), record))
                .collect(),
        }
    }

    /// Inserts a record under its name.
    pub fn insert(&mut self, record: Record) {
        self.records.insert(record.name.clone(), record);
    }

    /// Looks up a record by name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Returns true if a record with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Iterates records in name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Iterates record names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record::new("client", "packages/client")
            .with_type("app")
            .with_source_root("packages/client/src")
            .with_tags(vec!["scope:client".into()])
            .with_targets(vec!["build".into(), "test".into()])
            .with_dependencies(vec!["db".into()])
            .with_custom_field("owner", Value::from("platform-team"))
    }

    #[test]
    fn test_flatten_merges_custom_fields() {
        let row = sample_record().flatten();
        assert_eq!(row.get("name"), Some(&Value::from("client")));
        assert_eq!(row.get("type"), Some(&Value::from("app")));
        assert_eq!(row.get("owner"), Some(&Value::from("platform-team")));
        assert_eq!(
            row.get("tags"),
            Some(&Value::StrList(vec!["scope:client".into()]))
        );
    }

    #[test]
    fn test_flatten_omits_absent_source_root() {
        let record = Record::new("db", "packages/db").with_type("lib");
        let row = record.flatten();
        assert!(!row.contains_key("sourceRoot"));
    }

    #[test]
    fn test_record_json_field_names() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert!(json.get("type").is_some());
        assert!(json.get("sourceRoot").is_some());
        assert!(json.get("dependedByProjects").is_some());
        assert!(json.get("customFields").is_some());
    }

    #[test]
    fn test_dataset_iteration_is_name_ordered() {
        let dataset = Dataset::from_records(vec![
            Record::new("zeta", "z"),
            Record::new("alpha", "a"),
            Record::new("mid", "m"),
        ]);
        let names: Vec<&str> = dataset.names().collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_dataset_lookup() {
        let mut dataset = Dataset::new();
        dataset.insert(sample_record());
        assert!(dataset.contains("client"));
        assert!(dataset.get("missing").is_none());
        assert_eq!(dataset.len(), 1);
    }
}
