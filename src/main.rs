//! nxdb CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, logs failures to stderr,
//! and exits non-zero on failure. All logic lives in the library.

use nxdb::cli;
use nxdb::observability::Logger;

fn main() {
    if let Err(e) = cli::run() {
        Logger::error("command_failed", &[("error", &e.to_string())]);
        std::process::exit(1);
    }
}
