use anyhow::Result;
use handler_chain::HandlerChain;
use narrator_core::{init_tracing, Bot as CoreBot, Message as CoreMessage};
use narrator_telegram::{run_repl, run_webhook};
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::components::{build_bot_components, build_handler_chain, BotComponents};
use super::config::BotConfig;

/// NarratorBot: config, components, and handler chain, without a running transport.
pub struct NarratorBot {
    pub config: BotConfig,
    pub components: BotComponents,
    pub handler_chain: HandlerChain,
}

impl NarratorBot {
    /// Builds components and the handler chain. Validates config; does not touch the network.
    pub fn new(config: BotConfig) -> Result<Self> {
        Self::with_handler_bot(config, None)
    }

    /// Like [`NarratorBot::new`], but handlers deliver through `handler_bot` when given (tests).
    pub fn with_handler_bot(
        config: BotConfig,
        handler_bot: Option<Arc<dyn CoreBot>>,
    ) -> Result<Self> {
        config.validate()?;
        let components = build_bot_components(&config, handler_bot)?;
        let handler_chain = build_handler_chain(&config, &components);
        Ok(Self {
            config,
            components,
            handler_chain,
        })
    }

    /// Drive handler chain with core Message (for integration tests).
    #[doc(hidden)]
    pub async fn handle_core_message(&self, message: &CoreMessage) -> Result<()> {
        info!(
            user_id = message.user.id,
            text_len = message.content.chars().count(),
            "Handling core message"
        );
        if let Err(e) = self.handler_chain.handle(message).await {
            error!(error = %e, user_id = message.user.id, "Handler chain failed");
        }
        Ok(())
    }
}

/// Main entry: validate config, init logging, build components, then serve updates via webhook
/// (when configured) or long polling.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        model = %config.tts().tts_model,
        max_chars = config.narration().max_chars,
        webhook = config.webhook().is_some(),
        "Initializing bot"
    );

    let bot = NarratorBot::new(config)?;
    let teloxide_bot = bot.components.teloxide_bot.clone();

    info!("Bot started successfully");

    match bot.config.webhook().cloned() {
        Some(webhook) => run_webhook(teloxide_bot, bot.handler_chain, webhook).await,
        None => run_repl(teloxide_bot, bot.handler_chain).await,
    }
}
