//! CLI command implementations

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::schema::SchemaRegistry;
use crate::validation::{resolve_fields, OmitSet, Record, RecordValidator, RuleConfig, Verdict};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_record, write_error, write_response};

/// Configuration file structure
///
/// ```json
/// { "schema_path": "schema.json", "omit": ["id"], "rules": { "bio": { "maxLength": 140 } } }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema file or directory (required). Relative to the config file.
    pub schema_path: PathBuf,

    /// Fields left out of every validation (optional)
    #[serde(default)]
    pub omit: Vec<String>,

    /// Supplementary per-field rules (optional)
    #[serde(default)]
    pub rules: RuleConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let mut config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        if config.schema_path.as_os_str().is_empty() {
            return Err(CliError::config_error("schema_path must not be empty"));
        }

        if config.schema_path.is_relative() {
            if let Some(base) = path.parent() {
                config.schema_path = base.join(&config.schema_path);
            }
        }

        Ok(config)
    }

    /// Load the schema registry the config points at
    pub fn load_registry(&self) -> CliResult<SchemaRegistry> {
        let registry = SchemaRegistry::from_path(&self.schema_path)?;
        info!(
            path = %self.schema_path.display(),
            models = registry.len(),
            "schema loaded"
        );
        Ok(registry)
    }

    /// Configured omit list plus any extra fields
    pub fn omit_set(&self, extra: &[String]) -> OmitSet {
        self.omit.iter().chain(extra).cloned().collect()
    }
}

/// Main CLI entry point
///
/// Parses arguments, installs logging and dispatches to the command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);
    run_command(cli.command)
}

/// Log to stderr so stdout carries only JSON responses
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Validate {
            config,
            model,
            record,
            omit,
        } => validate(&config, &model, record.as_deref(), &omit),
        Command::Models { config } => models(&config),
    }
}

/// Validate one record and print the verdict.
///
/// An invalid record prints its verdict and then fails with
/// `RECORDCHECK_CLI_INVALID_RECORD`.
pub fn validate(
    config_path: &Path,
    model: &str,
    record_path: Option<&Path>,
    extra_omit: &[String],
) -> CliResult<()> {
    let verdict = read_record(record_path)
        .and_then(|record| validate_record(config_path, model, &record, extra_omit))
        .or_else(report_error)?;

    write_response(serde_json::to_value(&verdict)?)?;

    if !verdict.is_valid {
        return Err(CliError::invalid_record(verdict.error_summary));
    }
    Ok(())
}

/// Print an error response, then pass the error on
fn report_error<T>(e: CliError) -> CliResult<T> {
    write_error(e.code_str(), e.message())?;
    Err(e)
}

/// Validate a record using the schema, omit list and rules from a config file
pub fn validate_record(
    config_path: &Path,
    model: &str,
    record: &Record,
    extra_omit: &[String],
) -> CliResult<Verdict> {
    let config = Config::load(config_path)?;
    let registry = config.load_registry()?;
    let omit = config.omit_set(extra_omit);

    debug!(model, fields = record.len(), "validating record");
    let verdict = RecordValidator::new(&registry).validate(model, record, &omit, &config.rules)?;
    Ok(verdict)
}

/// Print every model with the fields that validation would check
pub fn models(config_path: &Path) -> CliResult<()> {
    let described = describe_models(config_path).or_else(report_error)?;
    write_response(described)
}

/// Describe every model and its resolved fields
pub fn describe_models(config_path: &Path) -> CliResult<Value> {
    let config = Config::load(config_path)?;
    let registry = config.load_registry()?;
    let omit = config.omit_set(&[]);

    let models = registry
        .models()
        .map(|model| -> CliResult<Value> {
            let fields = resolve_fields(model, &omit);
            Ok(json!({
                "name": model.name,
                "fields": serde_json::to_value(&fields)?,
            }))
        })
        .collect::<CliResult<Vec<Value>>>()?;

    Ok(json!({ "models": models }))
}
