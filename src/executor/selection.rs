//! Selection normalization and projection
//!
//! A parsed selection resolves to a concrete ordered field list: the
//! wildcard becomes the sentinel `["*"]`, an explicit list stays verbatim.
//! Projection then extracts exactly those keys from each flattened record.

use crate::dataset::Row;
use crate::parser::Selection;

use super::errors::{ExecutorError, ExecutorResult};

/// Sentinel meaning "all fields present on the record".
pub const WILDCARD: &str = "*";

/// Resolves a selection into the ordered field list used for projection.
pub fn normalize_selection(selection: &Selection) -> ExecutorResult<Vec<String>> {
    match selection {
        Selection::All => Ok(vec![WILDCARD.to_string()]),
        Selection::List(fields) => {
            if fields.is_empty() {
                return Err(ExecutorError::empty_selection());
            }
            Ok(fields.iter().map(|f| f.trim().to_string()).collect())
        }
    }
}

/// Returns true if the normalized selection is the wildcard sentinel.
pub fn is_wildcard(selection: &[String]) -> bool {
    selection.len() == 1 && selection[0] == WILDCARD
}

/// Projects a flattened record through the normalized selection.
///
/// The wildcard passes the row through unchanged. An explicit list extracts
/// exactly the requested keys; a missing key fails with
/// `NX_INVALID_SELECTION_KEY` enumerating the row's actual keys.
pub fn project_by_selection(row: Row, selection: &[String]) -> ExecutorResult<Row> {
    if is_wildcard(selection) {
        return Ok(row);
    }

    let mut projected = Row::new();
    for key in selection {
        match row.get(key) {
            Some(value) => {
                projected.insert(key.clone(), value.clone());
            }
            None => {
                let available: Vec<&str> = row.keys().map(String::as_str).collect();
                return Err(ExecutorError::invalid_selection_key(key, &available));
            }
        }
    }

    Ok(projected)
}
