//! Response builders for the proxy integration.
//!
//! Every response carries the same permissive CORS headers.

use serde_json::{Value, json};

use crate::errors::NotifierError;

pub const SUCCESS_MESSAGE: &str = "Results sent to Telegram successfully";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

pub const CORS_ALLOW_METHODS: &str = "GET,OPTIONS,PATCH,DELETE,POST,PUT";
pub const CORS_ALLOW_HEADERS: &str = "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version";

#[must_use]
pub fn cors_headers() -> Value {
    json!({
        "Access-Control-Allow-Credentials": "true",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": CORS_ALLOW_METHODS,
        "Access-Control-Allow-Headers": CORS_ALLOW_HEADERS,
    })
}

/// Returns a JSON response with the given status code.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    let mut headers = cors_headers();
    headers["Content-Type"] = Value::String("application/json".to_string());
    json!({
        "statusCode": status_code,
        "headers": headers,
        "body": body.to_string()
    })
}

/// Returns a 200 OK with an empty body for CORS preflight.
#[must_use]
pub fn preflight() -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(),
        "body": ""
    })
}

/// Returns a 405 response.
#[must_use]
pub fn method_not_allowed() -> Value {
    json_response(405, &json!({ "message": METHOD_NOT_ALLOWED_MESSAGE }))
}

/// Returns a 200 OK confirming delivery.
#[must_use]
pub fn ok_sent() -> Value {
    json_response(200, &json!({ "success": true, "message": SUCCESS_MESSAGE }))
}

/// Returns the failure response for `error`.
#[must_use]
pub fn err_response(error: &NotifierError) -> Value {
    json_response(
        error.status_code(),
        &json!({ "success": false, "error": error.public_message() }),
    )
}
