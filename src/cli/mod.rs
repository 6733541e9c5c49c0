//! CLI module for recordcheck
//!
//! Provides command-line interface for:
//! - validate: Check one record against a model and print the verdict
//! - models: List models and the fields validation would check

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{describe_models, models, run, run_command, validate, validate_record, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_record, read_record, write_error, write_response};
