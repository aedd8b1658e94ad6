//! Telegram Bot API integration

pub mod client;
pub mod message_formatter;

pub use client::{
    PARSE_MODE_MARKDOWN, SendMessageRequest, TelegramApi, TelegramClient, TelegramResponse,
};
pub use message_formatter::{format_results_message, performance_comment};
