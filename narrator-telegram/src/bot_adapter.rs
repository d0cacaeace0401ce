//! Wraps teloxide::Bot and implements [`narrator_core::Bot`]. Production code delivers through
//! Telegram; tests substitute another Bot impl.

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use narrator_core::{check_upload_size, Bot as CoreBot, BotError, Chat, Message, Result};
use teloxide::{prelude::*, types::ChatId, types::InputFile};
use tracing::{error, info};

use crate::config::TelegramConfig;

/// File name the WAV upload is given.
pub const VOICE_FILE_NAME: &str = "narration.wav";

/// Builds the teloxide client, pointing it at TELEGRAM_API_URL when configured.
pub fn build_teloxide_bot(config: &TelegramConfig) -> AnyResult<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => {
            let url = reqwest::Url::parse(url_str).map_err(|e| {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL");
                anyhow::anyhow!("Invalid TELEGRAM_API_URL {}: {}", url_str, e)
            })?;
            info!(url = %url, "Using custom Telegram API URL");
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Thin wrapper around teloxide::Bot that implements narrator-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// Uploads the WAV straight from memory; nothing touches the filesystem.
    async fn send_voice(&self, chat: &Chat, audio: Vec<u8>, caption: Option<&str>) -> Result<()> {
        check_upload_size(audio.len())?;

        let file = InputFile::memory(audio).file_name(VOICE_FILE_NAME);
        let request = self.bot.send_voice(ChatId(chat.id), file);
        let request = match caption {
            Some(caption) => request.caption(caption.to_string()),
            None => request,
        };
        request.await.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
