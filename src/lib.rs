/// Quiz notifier - relays quiz results to a Telegram chat.
///
/// This crate implements a single AWS Lambda behind an HTTP proxy
/// integration. Each invocation receives a quiz-result submission, renders it
/// as a Markdown message and forwards it to the Telegram Bot API
/// `sendMessage` endpoint.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - reqwest for the outbound Telegram call
/// - serde / `serde_json` for the inbound and outbound payloads
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use quiz_notifier::api::handler::notify;
/// use quiz_notifier::core::config::AppConfig;
/// use quiz_notifier::telegram::TelegramClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     quiz_notifier::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let telegram = TelegramClient::new(config.telegram_api_base.clone());
///
///     let event = serde_json::json!({
///         "requestContext": { "http": { "method": "POST" } },
///         "body": r#"{"name":"Ada","surname":"Lee","correctAnswers":1,"totalQuestions":1,"score":100,"answers":[{"selected":"bigger","correct":"bigger","isCorrect":true}]}"#
///     });
///
///     let response = notify(&event, &config, &telegram).await;
///     println!("{response}");
///     Ok(())
/// }
/// ```
pub mod api;
pub mod core;
pub mod errors;
pub mod telegram;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Log lines go to stderr so they land in `CloudWatch` Logs next to the
/// runtime's own diagnostics. Calling this more than once is harmless.
///
/// # Example
///
/// ```
/// quiz_notifier::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
