//! # Narrator bot application
//!
//! Wires narration-handlers, the Gemini TTS client and the Telegram transport. Loads config from
//! env and serves updates by webhook or long polling; `narrate` runs the same pipeline offline.

pub mod cli;
pub mod components;
pub mod config;
pub mod narrate;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use components::{
    build_bot_components, build_handler_chain, build_narrator, build_synthesizer, BotComponents,
};
pub use config::{BaseConfig, BotConfig, NarrationConfig};
pub use narrate::{describe, narrate_to_file};
pub use runner::{run_bot, NarratorBot};
