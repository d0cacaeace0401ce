//! BotConfig: BaseConfig + NarrationConfig + EnvTtsConfig. Use load() for env-based loading.

use anyhow::Result;
use narrator_telegram::{TelegramConfig, WebhookConfig};
use tts_client::EnvTtsConfig;

use super::{BaseConfig, NarrationConfig};

/// Full bot config. Call validate() after load() to fail fast before init.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub narration: NarrationConfig,
    pub tts: EnvTtsConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let narration = NarrationConfig::from_env()?;
        let tts = EnvTtsConfig::from_env()?;
        Ok(Self {
            base,
            narration,
            tts,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.narration.validate()?;
        self.tts.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn telegram(&self) -> &TelegramConfig {
        &self.base.telegram
    }
    pub fn bot_token(&self) -> &str {
        &self.base.telegram.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn webhook(&self) -> Option<&WebhookConfig> {
        self.base.telegram.webhook.as_ref()
    }
    pub fn narration(&self) -> &NarrationConfig {
        &self.narration
    }
    pub fn tts(&self) -> &EnvTtsConfig {
        &self.tts
    }
}
