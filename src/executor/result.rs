//! Result envelope for query execution

use serde::Serialize;

use crate::dataset::Row;

/// Result of one query: projected rows, total count, resolved selection.
///
/// `total` always equals `results.len()`; it is carried explicitly so
/// serialized results are self-describing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    /// Projected rows in dataset iteration order
    pub results: Vec<Row>,
    /// Number of rows returned
    pub total: usize,
    /// The normalized selection the rows were projected through
    pub selection: Vec<String>,
}

impl QueryResult {
    /// Creates a result envelope; `total` derives from the rows.
    pub fn new(results: Vec<Row>, selection: Vec<String>) -> Self {
        Self {
            total: results.len(),
            results,
            selection,
        }
    }

    /// Returns true if no records matched.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Iterates the result rows.
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.results.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Value;

    #[test]
    fn test_total_matches_rows() {
        let mut row = Row::new();
        row.insert("name".into(), Value::from("db"));

        let result = QueryResult::new(vec![row], vec!["*".to_string()]);
        assert_eq!(result.total, 1);
        assert_eq!(result.len(), 1);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let result = QueryResult::new(Vec::new(), vec!["name".to_string()]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["total"], 0);
        assert!(json["results"].as_array().unwrap().is_empty());
        assert_eq!(json["selection"][0], "name");
    }
}
