//! nxdb - a workspace project database queried with NXQL
//!
//! NXQL is a small SQL-like language over one table of project records:
//!
//! ```text
//! SELECT name, criticality FROM projects WHERE 'lib' IN tags
//! ```

pub mod cli;
pub mod dataset;
pub mod executor;
pub mod observability;
pub mod parser;
pub mod schema;
pub mod store;
