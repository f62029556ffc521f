//! On-disk persistence for the project dataset.
//!
//! The database is a single pretty-printed JSON file under a `.nxdb`
//! directory, keyed by project name:
//!
//! ```text
//! <workspace>/.nxdb/projects.json
//! ```
//!
//! Reads load the whole file into a [`Dataset`]; writes replace it. There is
//! no partial update and no locking, callers own concurrency.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::dataset::Dataset;

/// Directory holding the database file, relative to the workspace root.
pub const DB_DIR: &str = ".nxdb";

/// Database file name inside [`DB_DIR`].
pub const DB_FILE: &str = "projects.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database file not found at {0}. Run against an initialized workspace.")]
    NotFound(PathBuf),

    #[error("Failed to read database at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed database at {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Returns the database file path for a workspace root.
pub fn database_path(workspace: &Path) -> PathBuf {
    workspace.join(DB_DIR).join(DB_FILE)
}

/// Loads the dataset from `<workspace>/.nxdb/projects.json`.
pub fn read_database(workspace: &Path) -> StoreResult<Dataset> {
    let path = database_path(workspace);
    if !path.is_file() {
        return Err(StoreError::NotFound(path));
    }

    let text = fs::read_to_string(&path).map_err(|source| StoreError::Io {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| StoreError::Malformed { path, source })
}

/// Writes the dataset back, creating the `.nxdb` directory if needed.
pub fn write_database(workspace: &Path, dataset: &Dataset) -> StoreResult<()> {
    let dir = workspace.join(DB_DIR);
    fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
        path: dir.clone(),
        source,
    })?;

    let path = dir.join(DB_FILE);
    let text = serde_json::to_string_pretty(dataset).map_err(|source| StoreError::Malformed {
        path: path.clone(),
        source,
    })?;

    fs::write(&path, text).map_err(|source| StoreError::Io { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = Dataset::from_records(vec![
            Record::new("api", "packages/api").with_type("app"),
            Record::new("core", "packages/core").with_type("lib"),
        ]);

        write_database(dir.path(), &dataset).unwrap();
        let loaded = read_database(dir.path()).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get("api").unwrap().root, "packages/api");
        assert_eq!(loaded.get("core").unwrap().project_type, "lib");
    }

    #[test]
    fn test_missing_database_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_database(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_malformed_database_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let db_dir = dir.path().join(DB_DIR);
        std::fs::create_dir_all(&db_dir).unwrap();
        std::fs::write(db_dir.join(DB_FILE), "{ not json").unwrap();

        let err = read_database(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_database(dir.path(), &Dataset::new()).unwrap();
        assert!(database_path(dir.path()).is_file());
    }
}
