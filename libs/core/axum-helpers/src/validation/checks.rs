//! Field predicates.
//!
//! Values are inspected through their string form, the same way a form or
//! query validator sees them: `399` and `"399"` are both numeric, a missing
//! field and `null` are both empty.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").expect("integer pattern"));

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?(?:[0-9]*\.)?[0-9]+$").expect("numeric pattern"));

/// String form of a JSON value; `None` and `null` become `""`.
pub fn as_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

pub fn is_int(value: Option<&Value>) -> bool {
    INT.is_match(&as_text(value))
}

pub fn is_numeric(value: Option<&Value>) -> bool {
    !matches!(value, Some(Value::Bool(_))) && NUMERIC.is_match(&as_text(value))
}

pub fn is_boolean(value: Option<&Value>) -> bool {
    matches!(as_text(value).as_str(), "true" | "false" | "1" | "0")
}

pub fn not_empty(value: Option<&Value>) -> bool {
    !as_text(value).is_empty()
}

/// Numeric value of a number or numeric string.
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if NUMERIC.is_match(s) => s.parse().ok(),
        _ => None,
    }
}

/// Boolean value of `true`/`false` or their `"true"`/`"false"`/`"1"`/`"0"` spellings.
pub fn as_bool(value: &Value) -> Option<bool> {
    match as_text(Some(value)).as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
