//! JSON I/O handling for CLI
//!
//! - Input: one JSON object, from a file or stdin
//! - Output: one JSON object per invocation on stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::{json, Value};

use super::errors::{CliError, CliResult};
use crate::validation::Record;

/// Read a record from `path`, or from stdin when no path is given
pub fn read_record(path: Option<&Path>) -> CliResult<Record> {
    let content = match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            CliError::io_error(format!("Failed to read record '{}': {}", path.display(), e))
        })?,
        None => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            buf
        }
    };

    parse_record(&content)
}

/// Parse a record from JSON text
pub fn parse_record(content: &str) -> CliResult<Record> {
    if content.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    match serde_json::from_str(content)? {
        Value::Object(record) => Ok(record),
        other => Err(CliError::io_error(format!(
            "Record must be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    emit(&ok_response(data))
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    emit(&error_response(code, message))
}

fn ok_response(data: Value) -> Value {
    json!({ "status": "ok", "data": data })
}

fn error_response(code: &str, message: &str) -> Value {
    json!({ "status": "error", "code": code, "message": message })
}

/// One compact JSON object per line
fn emit(response: &Value) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, response)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
