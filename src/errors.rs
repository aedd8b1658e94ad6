use thiserror::Error;

/// Caller-facing error string when the submission lacks `name` or `surname`.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Caller-facing error string when Telegram credentials are absent.
pub const NOT_CONFIGURED_MESSAGE: &str = "Telegram bot not configured";

/// Fallback used when Telegram rejects a message without a `description`.
pub const PROVIDER_FALLBACK_MESSAGE: &str = "Telegram API error";

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Telegram bot not configured")]
    NotConfigured,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to parse submission: {0}")]
    Parse(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Telegram API error: {0}")]
    Provider(String),
}

impl NotifierError {
    /// HTTP status returned to the caller for this failure.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            NotifierError::MissingFields => 400,
            _ => 500,
        }
    }

    /// Text placed in the `error` field of the response body.
    ///
    /// Client, configuration and provider failures surface a fixed or
    /// provider-supplied string; everything else is reported as an internal
    /// server error carrying the underlying description.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            NotifierError::MissingFields => MISSING_FIELDS_MESSAGE.to_string(),
            NotifierError::NotConfigured => NOT_CONFIGURED_MESSAGE.to_string(),
            NotifierError::Provider(description) => description.clone(),
            NotifierError::Config(msg) | NotifierError::Parse(msg) | NotifierError::Http(msg) => {
                format!("Internal server error: {msg}")
            }
        }
    }
}

impl From<reqwest::Error> for NotifierError {
    fn from(error: reqwest::Error) -> Self {
        NotifierError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for NotifierError {
    fn from(error: serde_json::Error) -> Self {
        NotifierError::Parse(error.to_string())
    }
}

impl From<base64::DecodeError> for NotifierError {
    fn from(error: base64::DecodeError) -> Self {
        NotifierError::Parse(format!("invalid base64 body: {error}"))
    }
}
