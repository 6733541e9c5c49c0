//! CLI argument definitions using clap
//!
//! Commands:
//! - recordcheck validate --config <path> --model <name> [--record <path>] [--omit <field>]...
//! - recordcheck models --config <path>

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// recordcheck - validate records against model schemas
#[derive(Parser, Debug)]
#[command(name = "recordcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one record and print the verdict
    Validate {
        /// Path to configuration file
        #[arg(long, default_value = "./recordcheck.json")]
        config: PathBuf,

        /// Model to validate against
        #[arg(long)]
        model: String,

        /// Record file (JSON object); reads stdin when absent
        #[arg(long)]
        record: Option<PathBuf>,

        /// Field to leave out of validation, in addition to the configured ones
        #[arg(long = "omit", value_name = "FIELD")]
        omit: Vec<String>,
    },

    /// List models and the fields that would be validated
    Models {
        /// Path to configuration file
        #[arg(long, default_value = "./recordcheck.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from([
            "recordcheck",
            "-vv",
            "validate",
            "--model",
            "User",
            "--omit",
            "id",
            "--omit",
            "createdAt",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Validate {
                config,
                model,
                record,
                omit,
            } => {
                assert_eq!(config, PathBuf::from("./recordcheck.json"));
                assert_eq!(model, "User");
                assert!(record.is_none());
                assert_eq!(omit, vec!["id", "createdAt"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_validate_requires_model() {
        assert!(Cli::try_parse_from(["recordcheck", "validate"]).is_err());
    }
}
