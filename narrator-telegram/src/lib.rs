//! # narrator-telegram
//!
//! Telegram transport layer: teloxide → core adapters, the [`narrator_core::Bot`] implementation
//! used to deliver voice messages, minimal config, and the long-polling / webhook runners.
//! Knows nothing about speech synthesis; it only feeds messages into a handler chain.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_teloxide_bot, TelegramBotAdapter, VOICE_FILE_NAME};
pub use config::{TelegramConfig, WebhookConfig, DEFAULT_WEBHOOK_PORT};
pub use runner::{run_repl, run_webhook};
