//! Logging for nxdb.

mod logger;

pub use logger::{Logger, Severity};
