//! CLI module for the Service Dashboard API
//!
//! Parses flags, resolves configuration and runs the HTTP server.

mod args;
mod commands;
mod errors;

pub use args::Cli;
pub use commands::{open_store, resolve_config, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse arguments and run
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}
