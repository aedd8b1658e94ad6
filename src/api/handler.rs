//! API Lambda handler.
//!
//! Flow per invocation:
//! - CORS preflight and method check
//! - Required-field validation
//! - Message rendering
//! - Credential lookup and a single `sendMessage` call

use lambda_runtime::{Error, LambdaEvent};
use reqwest::Client;
use serde_json::Value;
use tracing::{error, info, warn};

use super::{helpers, parsing};
use crate::core::config::AppConfig;
use crate::core::models::{Submission, has_required_field};
use crate::errors::NotifierError;
use crate::telegram::{SendMessageRequest, TelegramApi, TelegramClient, format_results_message};

pub use self::function_handler as handler;

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(Client::new);

/// Lambda handler for the API entrypoint.
///
/// Configuration is read from the environment on every invocation.
///
/// # Errors
///
/// Never returns `Err`; every failure is mapped to an HTTP response.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Config error: {}", e);
            // Preflight and method checks do not depend on configuration.
            return Ok(match early_response(&event.payload) {
                Some(response) => response,
                None => helpers::err_response(&NotifierError::Config(e)),
            });
        }
    };

    let telegram =
        TelegramClient::with_http_client(HTTP_CLIENT.clone(), config.telegram_api_base.clone());

    Ok(notify(&event.payload, &config, &telegram).await)
}

/// Handle one proxy event and produce the proxy response.
///
/// Pure with respect to its inputs: the only side effects are the call made
/// through `telegram` and logging.
pub async fn notify<T>(event: &Value, config: &AppConfig, telegram: &T) -> Value
where
    T: TelegramApi + ?Sized,
{
    if let Some(response) = early_response(event) {
        return response;
    }

    match deliver(event, config, telegram).await {
        Ok(()) => {
            info!("Results delivered to Telegram");
            helpers::ok_sent()
        }
        Err(e) => {
            match &e {
                NotifierError::MissingFields => {
                    warn!("Submission rejected: missing name or surname");
                }
                NotifierError::NotConfigured => error!("Missing Telegram credentials"),
                NotifierError::Provider(_) => {}
                other => error!("Server error: {}", other),
            }
            helpers::err_response(&e)
        }
    }
}

/// Responses decided by the method alone.
fn early_response(event: &Value) -> Option<Value> {
    match parsing::http_method(event).as_deref() {
        Some("OPTIONS") => Some(helpers::preflight()),
        Some("POST") => None,
        _ => Some(helpers::method_not_allowed()),
    }
}

async fn deliver<T>(event: &Value, config: &AppConfig, telegram: &T) -> Result<(), NotifierError>
where
    T: TelegramApi + ?Sized,
{
    let body = parsing::parse_json_body(event)?;

    if !has_required_field(&body, "name") || !has_required_field(&body, "surname") {
        return Err(NotifierError::MissingFields);
    }

    let submission: Submission = serde_json::from_value(body)?;
    let text = format_results_message(&submission, &config.completion_timestamp());

    let credentials = config
        .telegram_credentials()
        .ok_or(NotifierError::NotConfigured)?;

    let request = SendMessageRequest::markdown(credentials.chat_id, text);
    let reply = telegram.send_message(credentials.bot_token, &request).await?;

    if reply.ok {
        Ok(())
    } else {
        error!(response = %reply.raw, "Telegram API error");
        Err(reply.into_error())
    }
}
