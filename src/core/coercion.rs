//! Loose readings of client-supplied JSON.
//!
//! Submissions are not type-checked beyond `name`/`surname`, so every other
//! field is rendered and compared the way a browser client would see it:
//! absent is `undefined`, numbers print in their shortest form, and
//! truthiness follows the usual script rules.

use serde_json::{Number, Value};

/// Truthiness of a JSON value: `null`, `false`, `0` and `""` are falsy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of an optional field, `undefined` when absent.
#[must_use]
pub fn display_field(value: Option<&Value>) -> String {
    value.map_or_else(|| "undefined".to_string(), display_value)
}

/// Text form of a JSON value as it would appear inside a template string.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn display_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        // f64 Display already drops a trailing `.0`.
        n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
    }
}

/// Numeric reading of an optional field; `NaN` when it has none.
#[must_use]
pub fn numeric_field(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Array(_) | Value::Object(_)) => f64::NAN,
    }
}
