//! CLI command implementations
//!
//! The query command runs a fixed pipeline: parse the query file, load the
//! database, validate custom fields against the schema (filling defaults),
//! execute, then print or write the result JSON. Any stage failing aborts
//! the whole run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::dataset::Dataset;
use crate::executor::QueryExecutor;
use crate::observability::Logger;
use crate::parser;
use crate::schema::{SchemaLoader, SchemaValidator, SCHEMA_FILE};
use crate::store;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Dispatches a parsed command.
pub fn run(command: Command) -> CliResult<()> {
    match command {
        Command::Query {
            query_file,
            workspace,
            output,
        } => run_query(&query_file, &workspace, output.as_deref()),
        Command::Schema { workspace } => run_schema(&workspace),
    }
}

fn run_query(query_file: &Path, workspace: &Path, output: Option<&Path>) -> CliResult<()> {
    let query = parser::parse_file(query_file)?;
    Logger::debug(
        "query_parsed",
        &[("query", &query.to_string()), ("source", &query.source)],
    );

    let dataset = store::read_database(workspace)?;
    Logger::debug(
        "db_loaded",
        &[("records", &dataset.len().to_string())],
    );

    let dataset = apply_schema(workspace, dataset)?;

    let result = QueryExecutor::new(&dataset).execute(&query)?;
    Logger::info(
        "query_executed",
        &[
            ("file", &query_file.display().to_string()),
            ("total", &result.total.to_string()),
        ],
    );

    let text = serde_json::to_string_pretty(&result)?;
    match output {
        Some(path) => fs::write(path, text).map_err(|source| CliError::Output {
            path: path.to_path_buf(),
            source,
        })?,
        None => println!("{}", text),
    }

    Ok(())
}

/// Runs every record's custom fields through the schema validator, replacing
/// them with the default-filled result. A missing schema file means no custom
/// field validation and no defaults.
fn apply_schema(workspace: &Path, dataset: Dataset) -> CliResult<Dataset> {
    let schema_path = schema_path(workspace);
    if !schema_path.is_file() {
        // Legal state, but worth surfacing: no defaults get filled.
        Logger::warn("schema_absent", &[("path", &schema_path.display().to_string())]);
        return Ok(dataset);
    }

    let loader = SchemaLoader::from_file(&schema_path)?;
    let validator = SchemaValidator::new(loader.schema());

    let mut validated = Vec::new();
    for record in dataset.records() {
        let mut record = record.clone();
        record.custom_fields = validator.validate_fields(&record.custom_fields)?;
        validated.push(record);
    }

    Ok(Dataset::from_records(validated))
}

fn run_schema(workspace: &Path) -> CliResult<()> {
    let schema_path = schema_path(workspace);
    if !schema_path.is_file() {
        return Err(CliError::SchemaFileMissing(schema_path));
    }

    let loader = SchemaLoader::from_file(&schema_path)?;
    let text = serde_json::to_string_pretty(loader.schema())?;
    println!("{}", text);

    Ok(())
}

fn schema_path(workspace: &Path) -> PathBuf {
    workspace.join(SCHEMA_FILE)
}
