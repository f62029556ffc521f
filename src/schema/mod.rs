//! Custom-field schema subsystem for nxdb
//!
//! The schema declares which custom fields records may carry, their types,
//! and their defaults. It is loaded once at startup, validated strictly, and
//! then treated as immutable for the process lifetime.

mod errors;
mod loader;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, Severity};
pub use loader::{SchemaLoader, RESERVED_FIELD_NAMES, SCHEMA_FILE};
pub use types::{FieldType, Schema, SchemaEntry};
pub use validator::SchemaValidator;
