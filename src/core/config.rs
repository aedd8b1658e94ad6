use std::env;

use chrono_tz::Tz;
use url::Url;

pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub telegram_api_base: Url,
    /// Zone used for the completion timestamp; `None` means server local time.
    pub results_timezone: Option<Tz>,
}

/// Borrowed view of the two secrets required to reach the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelegramCredentials<'a> {
    pub bot_token: &'a str,
    pub chat_id: &'a str,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `TELEGRAM_API_BASE` is not a valid URL or
    /// `RESULTS_TIMEZONE` is not a known IANA zone. Missing credentials are
    /// not an error here.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base = non_empty("TELEGRAM_API_BASE")
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.to_string());
        let telegram_api_base =
            Url::parse(&api_base).map_err(|e| format!("TELEGRAM_API_BASE: {e}"))?;

        let results_timezone = non_empty("RESULTS_TIMEZONE")
            .map(|raw| raw.parse::<Tz>().map_err(|e| format!("RESULTS_TIMEZONE: {e}")))
            .transpose()?;

        Ok(Self {
            telegram_bot_token: non_empty("TELEGRAM_BOT_TOKEN"),
            telegram_chat_id: non_empty("TELEGRAM_CHAT_ID"),
            telegram_api_base,
            results_timezone,
        })
    }

    /// Returns both credentials, or `None` if either is missing.
    #[must_use]
    pub fn telegram_credentials(&self) -> Option<TelegramCredentials<'_>> {
        match (&self.telegram_bot_token, &self.telegram_chat_id) {
            (Some(bot_token), Some(chat_id)) => Some(TelegramCredentials { bot_token, chat_id }),
            _ => None,
        }
    }

    /// Current time rendered for the results message, e.g. `10/19/2026, 3:04:05 PM`.
    #[must_use]
    pub fn completion_timestamp(&self) -> String {
        const FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
        match self.results_timezone {
            Some(tz) => chrono::Utc::now().with_timezone(&tz).format(FORMAT).to_string(),
            None => chrono::Local::now().format(FORMAT).to_string(),
        }
    }
}
