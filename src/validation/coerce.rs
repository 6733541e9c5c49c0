//! Runtime value semantics for record values
//!
//! Records are loosely typed, so the checks are defined in terms of the
//! usual dynamic-language coercions: truthiness, the runtime kind of a value,
//! numeric coercion, date construction, string rendering and length.
//!
//! `None` always stands for a key that is absent from the record.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::fmt;

/// Largest absolute timestamp (ms) a date may carry.
const MAX_TIMESTAMP_MS: f64 = 8.64e15;

/// Runtime kind of a record value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Undefined,
    Boolean,
    Number,
    String,
    /// Arrays and maps
    Object,
}

impl ValueKind {
    /// Returns the kind of a (possibly absent) value.
    ///
    /// Null is an object, so a field declared `object` accepts it.
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None => ValueKind::Undefined,
            Some(Value::Bool(_)) => ValueKind::Boolean,
            Some(Value::Number(_)) => ValueKind::Number,
            Some(Value::String(_)) => ValueKind::String,
            Some(Value::Null) | Some(Value::Array(_)) | Some(Value::Object(_)) => ValueKind::Object,
        }
    }

    /// Returns the kind name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Truthiness: absent, null, false, 0, NaN and "" are falsy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Numeric coercion. Returns NaN where the value does not denote a number.
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => string_to_number(s),
        Some(Value::Array(items)) => match items.as_slice() {
            [] => 0.0,
            [single] => string_to_number(&to_display_string(single)),
            _ => f64::NAN,
        },
        Some(Value::Object(_)) => f64::NAN,
    }
}

fn string_to_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_digits(&s[2..], radix);
    }

    let is_decimal_literal = s.chars().any(|c| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !is_decimal_literal {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Accumulates in f64 so literals wider than any integer type stay finite.
fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// Whether the value coerces to a number other than NaN.
pub fn is_numeric(value: Option<&Value>) -> bool {
    !to_number(value).is_nan()
}

/// Whether constructing a date from the value yields a valid timestamp.
pub fn is_valid_date(value: Option<&Value>) -> bool {
    to_timestamp_ms(value).is_some()
}

/// Converts a value to epoch milliseconds the way date construction would.
pub fn to_timestamp_ms(value: Option<&Value>) -> Option<f64> {
    let ms = match value? {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => parse_date_string(s)?,
        array @ Value::Array(_) => parse_date_string(&to_display_string(array))?,
        Value::Object(_) => return None,
    };

    if ms.is_finite() && ms.abs() <= MAX_TIMESTAMP_MS {
        // Date construction truncates fractional milliseconds.
        Some(ms.trunc())
    } else {
        None
    }
}

fn parse_date_string(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(ms) = parse_iso_date_time(s) {
        return Some(ms);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis() as f64);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp_millis() as f64);
    }

    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.and_utc().timestamp_millis() as f64);
        }
    }

    const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            let dt = date.and_hms_opt(0, 0, 0)?;
            return Some(dt.and_utc().timestamp_millis() as f64);
        }
    }

    None
}

/// Parses `YYYY[-MM[-DD]][THH:mm[:ss[.sss]][Z|±HH:mm]]`.
///
/// Missing month and day default to 01 and missing seconds to 00. Forms
/// without a zone are read as UTC.
fn parse_iso_date_time(s: &str) -> Option<f64> {
    let (date, time) = match s.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (s, None),
    };

    let date = match date.len() {
        4 => format!("{}-01-01", date),
        7 => format!("{}-01", date),
        10 => date.to_string(),
        _ => return None,
    };

    let Some(time) = time else {
        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").ok()?;
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis() as f64);
    };

    let (clock, zone) = if let Some(clock) = time.strip_suffix(['Z', 'z']) {
        (clock, Some("Z"))
    } else if let Some(at) = time.rfind(['+', '-']) {
        (&time[..at], Some(&time[at..]))
    } else {
        (time, None)
    };
    let clock = if clock.len() == 5 {
        format!("{}:00", clock)
    } else {
        clock.to_string()
    };

    match zone {
        Some(zone) => {
            let dt = DateTime::parse_from_rfc3339(&format!("{}T{}{}", date, clock, zone)).ok()?;
            Some(dt.timestamp_millis() as f64)
        }
        None => {
            let dt = format!("{}T{}", date, clock);
            let dt = NaiveDateTime::parse_from_str(&dt, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
            Some(dt.and_utc().timestamp_millis() as f64)
        }
    }
}

/// Renders a value as its string form.
///
/// Arrays join their elements with commas (null elements render empty) and
/// maps render as `[object Object]`.
pub fn to_display_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_display_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Length of a value: UTF-16 code units of a string, elements of an array.
///
/// Characters outside the Basic Multilingual Plane count twice. Every other
/// value has no length.
pub fn value_length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.encode_utf16().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}
