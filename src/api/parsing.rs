use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value};

use crate::errors::NotifierError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of a proxy event, upper-cased.
///
/// Handles both payload format 2.0 (`requestContext.http.method`) and 1.0
/// (`httpMethod`).
pub fn http_method(event: &Value) -> Option<String> {
    v_str(event, &["requestContext", "http", "method"])
        .or_else(|| v_str(event, &["httpMethod"]))
        .map(str::to_ascii_uppercase)
}

/// Decode the event body as JSON.
///
/// A missing or blank body yields an empty object so that it falls through
/// to required-field validation.
pub fn parse_json_body(event: &Value) -> Result<Value, NotifierError> {
    let raw = match event.get("body") {
        None | Some(Value::Null) => return Ok(Value::Object(Map::new())),
        // Some integrations hand over an already-parsed body.
        Some(obj @ Value::Object(_)) => return Ok(obj.clone()),
        Some(Value::String(s)) => s,
        Some(_) => {
            return Err(NotifierError::Parse(
                "request body is not a string".to_string(),
            ));
        }
    };

    let is_base64 = event
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let text = if is_base64 {
        let bytes = STANDARD.decode(raw.trim())?;
        String::from_utf8(bytes)
            .map_err(|e| NotifierError::Parse(format!("body is not UTF-8: {e}")))?
    } else {
        raw.clone()
    };

    if text.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    Ok(serde_json::from_str(&text)?)
}
