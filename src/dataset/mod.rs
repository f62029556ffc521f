//! In-memory dataset for nxdb
//!
//! The dataset is a mapping from project name to [`Record`], materialized by
//! the persistence layer and handed to the executor by reference. The engine
//! never mutates it; evaluation only allocates new result rows.

mod record;
mod value;

pub use record::{Dataset, Record, Row};
pub use value::Value;
