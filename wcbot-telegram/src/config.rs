//! Bot config: token, optional Bot API URL, log file path. Loaded once at startup from env:
//! TELEGRAM_BOT_TOKEN (or BOT_TOKEN), TELEGRAM_API_URL (or TELOXIDE_API_URL), LOG_FILE.

use std::env;
use std::fmt;

use wcbot_core::{Result, WcbotError};

/// Log file used when LOG_FILE is unset.
pub const DEFAULT_LOG_FILE: &str = "logs/wcbot.log";

/// Telegram connectivity and logging config. Passed explicitly to the runner; never global.
#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: String,
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"***")
            .field("telegram_api_url", &self.telegram_api_url)
            .field("log_file", &self.log_file)
            .finish()
    }
}

/// Reads a variable, treating blank values as unset.
fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl TelegramConfig {
    /// Loads from env and validates. `token` overrides TELEGRAM_BOT_TOKEN / BOT_TOKEN when given.
    /// A missing or blank token is a [`WcbotError::Config`].
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| non_blank_var("TELEGRAM_BOT_TOKEN"))
            .or_else(|| non_blank_var("BOT_TOKEN"))
            .ok_or_else(|| WcbotError::Config("TELEGRAM_BOT_TOKEN not set".to_string()))?;
        let telegram_api_url =
            non_blank_var("TELEGRAM_API_URL").or_else(|| non_blank_var("TELOXIDE_API_URL"));
        let log_file = non_blank_var("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

        let config = Self {
            bot_token: bot_token.trim().to_string(),
            telegram_api_url,
            log_file,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builds config with the given token; no API URL override, default log file.
    pub fn with_token(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }

    /// Checks the token is present and the API URL, if set, is a valid URL.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            return Err(WcbotError::Config("TELEGRAM_BOT_TOKEN is empty".to_string()));
        }
        self.api_url()?;
        Ok(())
    }

    fn api_url(&self) -> Result<Option<reqwest::Url>> {
        self.telegram_api_url
            .as_deref()
            .map(|url| {
                reqwest::Url::parse(url).map_err(|e| {
                    WcbotError::Config(format!(
                        "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {} ({})",
                        url, e
                    ))
                })
            })
            .transpose()
    }

    /// Creates the teloxide Bot, pointed at the configured API URL if any.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        Ok(match self.api_url()? {
            Some(url) => bot.set_api_url(url),
            None => bot,
        })
    }
}
