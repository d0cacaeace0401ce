//! Bot configuration: BaseConfig (Telegram + log) + NarrationConfig + Gemini TTS config.

mod base;
mod bot_config;
mod narration;


pub use base::{BaseConfig, DEFAULT_LOG_FILE};
pub use bot_config::BotConfig;
pub use narration::NarrationConfig;
