//! Query execution over an in-memory dataset.

mod errors;
mod executor;
mod result;
mod selection;

pub use errors::{ExecutorError, ExecutorErrorCode, ExecutorResult};
pub use executor::{QueryExecutor, SOURCE_PROJECTS};
pub use result::QueryResult;
pub use selection::{normalize_selection, project_by_selection, WILDCARD};
