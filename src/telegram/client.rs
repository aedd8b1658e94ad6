//! Telegram Bot API client module
//!
//! Sends a single `sendMessage` call per invocation. No retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::core::coercion::{display_value, is_truthy};
use crate::errors::{NotifierError, PROVIDER_FALLBACK_MESSAGE};

/// Legacy Telegram Markdown; `*bold*` renders without escaping punctuation.
pub const PARSE_MODE_MARKDOWN: &str = "Markdown";

/// Body of the `sendMessage` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: String,
}

impl SendMessageRequest {
    #[must_use]
    pub fn markdown(chat_id: &str, text: String) -> Self {
        Self {
            chat_id: chat_id.to_string(),
            text,
            parse_mode: PARSE_MODE_MARKDOWN.to_string(),
        }
    }
}

/// Parsed Bot API reply. `raw` keeps the full document for logging.
#[derive(Debug, Clone)]
pub struct TelegramResponse {
    pub ok: bool,
    pub description: Option<String>,
    pub raw: Value,
}

impl TelegramResponse {
    #[must_use]
    pub fn from_value(raw: Value) -> Self {
        let ok = raw.get("ok").is_some_and(is_truthy);
        let description = raw
            .get("description")
            .filter(|d| is_truthy(d))
            .map(display_value);
        Self {
            ok,
            description,
            raw,
        }
    }

    /// Convert a rejected reply into the error surfaced to the caller.
    #[must_use]
    pub fn into_error(self) -> NotifierError {
        NotifierError::Provider(
            self.description
                .unwrap_or_else(|| PROVIDER_FALLBACK_MESSAGE.to_string()),
        )
    }
}

/// Outbound seam for the Bot API so the handler can be exercised without a
/// network.
#[async_trait]
pub trait TelegramApi: Send + Sync {
    /// Deliver `request` with the given bot token.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be sent or the reply is not
    /// JSON. A well-formed reply with `ok: false` is returned as `Ok`.
    async fn send_message(
        &self,
        bot_token: &str,
        request: &SendMessageRequest,
    ) -> Result<TelegramResponse, NotifierError>;
}

/// reqwest-backed [`TelegramApi`].
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: Client,
    api_base: Url,
}

impl TelegramClient {
    #[must_use]
    pub fn new(api_base: Url) -> Self {
        Self::with_http_client(Client::new(), api_base)
    }

    #[must_use]
    pub fn with_http_client(http: Client, api_base: Url) -> Self {
        Self { http, api_base }
    }

    /// `{base}/bot{token}/sendMessage`
    #[must_use]
    pub fn send_message_url(&self, bot_token: &str) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base.as_str().trim_end_matches('/'),
            bot_token
        )
    }
}

#[async_trait]
impl TelegramApi for TelegramClient {
    async fn send_message(
        &self,
        bot_token: &str,
        request: &SendMessageRequest,
    ) -> Result<TelegramResponse, NotifierError> {
        let response = self
            .http
            .post(self.send_message_url(bot_token))
            .json(request)
            .send()
            .await?;

        debug!(status = %response.status(), "Telegram sendMessage responded");

        // The Bot API reports failures in the JSON body, so the HTTP status is
        // not checked here.
        let body: Value = response.json().await?;
        if body.is_null() {
            return Err(NotifierError::Parse(
                "Telegram returned a null response".to_string(),
            ));
        }
        Ok(TelegramResponse::from_value(body))
    }
}
