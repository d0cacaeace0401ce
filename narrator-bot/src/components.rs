//! Component factory: builds BotComponents and the handler chain from config. Isolates assembly
//! logic from the runner.

use anyhow::Result;
use gemini_tts_client::GeminiTtsClient;
use handler_chain::HandlerChain;
use narration_handlers::{LoggingHandler, NarrationHandler, Narrator, StartHandler};
use narrator_core::Bot as CoreBot;
use narrator_telegram::{build_teloxide_bot, TelegramBotAdapter};
use std::sync::Arc;
use tracing::{info, instrument};
use tts_client::{mask_token, EnvTtsConfig, SpeechSynthesizer, TimeoutSynthesizer, TtsConfig};

use super::config::{BotConfig, NarrationConfig};

/// Core dependencies for run_bot; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    /// Delivery channel handed to handlers; the Telegram adapter unless overridden (tests).
    pub handler_bot: Arc<dyn CoreBot>,
    pub narrator: Arc<Narrator>,
}

/// Gemini client wrapped in the host timeout.
#[instrument(skip(tts), fields(model = %tts.model(), timeout_secs = tts.timeout().as_secs()))]
pub fn build_synthesizer(tts: &EnvTtsConfig) -> Arc<dyn SpeechSynthesizer> {
    info!(
        api_key = %mask_token(tts.api_key()),
        base_url = %tts.base_url(),
        "Using Gemini TTS"
    );
    let client = GeminiTtsClient::with_base_url(tts.api_key().to_string(), tts.base_url().to_string())
        .with_model(tts.model().to_string());
    Arc::new(TimeoutSynthesizer::new(client, tts.timeout()))
}

pub fn build_narrator(tts: &EnvTtsConfig, narration: &NarrationConfig) -> Arc<Narrator> {
    Arc::new(Narrator::new(build_synthesizer(tts), narration.max_chars))
}

/// Builds the teloxide client, the delivery channel and the narrator.
/// When `handler_bot_override` is `Some`, handlers deliver through it instead of Telegram.
#[instrument(skip(config, handler_bot_override))]
pub fn build_bot_components(
    config: &BotConfig,
    handler_bot_override: Option<Arc<dyn CoreBot>>,
) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config.telegram())?;
    let handler_bot = handler_bot_override
        .unwrap_or_else(|| Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())));
    let narrator = build_narrator(config.tts(), config.narration());

    Ok(BotComponents {
        teloxide_bot,
        handler_bot,
        narrator,
    })
}

/// Chain order: logging → /start and /help → narration.
pub fn build_handler_chain(config: &BotConfig, components: &BotComponents) -> HandlerChain {
    let narration = NarrationHandler::new(components.narrator.clone(), components.handler_bot.clone())
        .with_caption(config.narration().caption.clone());

    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StartHandler::new(components.handler_bot.clone())))
        .add_handler(Arc::new(narration))
}
