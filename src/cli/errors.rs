//! CLI-level error type
//!
//! Wraps the module errors so command handlers can use `?` throughout. Every
//! variant is fatal: the process prints the error and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

use crate::executor::ExecutorError;
use crate::parser::ParserError;
use crate::schema::SchemaError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Parser(#[from] ParserError),

    #[error("{0}")]
    Schema(#[from] SchemaError),

    #[error("{0}")]
    Executor(#[from] ExecutorError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Schema file not found at {0}.")]
    SchemaFileMissing(PathBuf),

    #[error("Failed to write output to {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
