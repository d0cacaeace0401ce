//! Telegram connectivity config. Loaded from env: BOT_TOKEN (or API_TOKEN), TELEGRAM_API_URL
//! (or TELOXIDE_API_URL), and the webhook settings WEBHOOK_URL / RENDER_EXTERNAL_HOSTNAME / PORT.

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_WEBHOOK_PORT: u16 = 8000;

/// Where Telegram should push updates and where to listen for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub url: String,
    pub port: u16,
}

impl WebhookConfig {
    /// Resolves webhook mode from env. WEBHOOK_URL wins; otherwise RENDER_EXTERNAL_HOSTNAME
    /// yields `https://{host}/webhook/{token}`. Neither set means long polling (`None`).
    pub fn from_env(bot_token: &str) -> Result<Option<Self>> {
        let url = match env::var("WEBHOOK_URL").ok().filter(|s| !s.trim().is_empty()) {
            Some(url) => url,
            None => match env::var("RENDER_EXTERNAL_HOSTNAME")
                .ok()
                .filter(|s| !s.trim().is_empty())
            {
                Some(host) => format!("https://{}/webhook/{}", host.trim(), bot_token),
                None => return Ok(None),
            },
        };
        let port = match env::var("PORT") {
            Ok(s) => s
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {}", s))?,
            Err(_) => DEFAULT_WEBHOOK_PORT,
        };
        Ok(Some(Self { url, port }))
    }
}

/// Telegram bot connectivity: token, optional API URL and optional webhook.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub webhook: Option<WebhookConfig>,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides BOT_TOKEN / API_TOKEN when given.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN")
                .or_else(|_| env::var("API_TOKEN"))
                .map_err(|_| anyhow::anyhow!("BOT_TOKEN (or API_TOKEN) not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let webhook = WebhookConfig::from_env(&bot_token)?;
        Ok(Self {
            bot_token,
            telegram_api_url,
            webhook,
        })
    }

    /// Builds config with the given token; other fields None.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            webhook: None,
        }
    }

    /// Checks URLs parse so a typo fails at startup instead of on the first update.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if let Some(ref webhook) = self.webhook {
            if reqwest::Url::parse(&webhook.url).is_err() {
                anyhow::bail!("Webhook URL is not a valid URL: {}", webhook.url);
            }
        }
        Ok(())
    }
}
