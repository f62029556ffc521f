//! CLI argument definitions using clap
//!
//! Commands:
//! - nxdb query <file.nxql> [--workspace <dir>] [--output <path>]
//! - nxdb schema [--workspace <dir>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// nxdb - query a workspace project database with NXQL
#[derive(Parser, Debug)]
#[command(name = "nxdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Execute an NXQL query file against the workspace database
    Query {
        /// Path to the .nxql query file
        query_file: PathBuf,

        /// Workspace root containing .nxdb/ and the schema file
        #[arg(long, default_value = ".")]
        workspace: PathBuf,

        /// Write the result JSON to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Load and print the workspace field schema
    Schema {
        /// Workspace root containing the schema file
        #[arg(long, default_value = ".")]
        workspace: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
