//! Base config: Telegram connectivity and logging. Loaded from env.

use anyhow::Result;
use narrator_telegram::TelegramConfig;
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/narrator-bot.log";

/// Base config: Telegram-related and logging only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN, TELEGRAM_API_URL and webhook settings
    pub telegram: TelegramConfig,
    /// LOG_FILE
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        Ok(Self { telegram, log_file })
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_file.trim().is_empty() {
            anyhow::bail!("LOG_FILE is empty");
        }
        self.telegram.validate()
    }
}
