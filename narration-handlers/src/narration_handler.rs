//! Narration handler: turns a text message into a voice message reply.

use async_trait::async_trait;
use narrator_core::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::narrator::Narrator;

// --- User-facing messages ---
const MSG_GENERATING: &str = "Generating fairy tale narration... 🎙️";
const MSG_SEND_FAILED: &str = "Sorry, I couldn't send the voice message";

/// Caption attached to delivered narrations when none is configured.
pub const DEFAULT_CAPTION: &str = "Your English fairy tale narrated by Gemini 2.5! 📖🔊";

/// Narrates any text message that reached it and replies with the audio as a voice message.
///
/// Validation failures are answered without calling the speech model. Every message it sees
/// ends the chain with `Stop`, whether narration succeeded or not.
#[derive(Clone)]
pub struct NarrationHandler {
    narrator: Arc<Narrator>,
    bot: Arc<dyn CoreBot>,
    caption: Option<String>,
}

impl NarrationHandler {
    pub fn new(narrator: Arc<Narrator>, bot: Arc<dyn CoreBot>) -> Self {
        Self {
            narrator,
            bot,
            caption: Some(DEFAULT_CAPTION.to_string()),
        }
    }

    /// Replaces the voice message caption; `None` sends the audio without one.
    pub fn with_caption(mut self, caption: Option<String>) -> Self {
        self.caption = caption;
        self
    }

    /// Sends `text` as a reply; a failure here is only logged since there is nothing left to tell the user.
    async fn reply_and_stop(&self, message: &Message, text: &str) -> Result<HandlerResponse> {
        if let Err(e) = self.bot.reply_to(message, text).await {
            warn!(error = %e, chat_id = message.chat.id, "Failed to send narration reply");
        }
        Ok(HandlerResponse::Stop)
    }
}

#[async_trait]
impl Handler for NarrationHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let request = match self.narrator.validate(&message.content) {
            Ok(request) => request,
            Err(e) => {
                info!(reason = %e, "step: narration request rejected");
                return self.reply_and_stop(message, &e.user_message()).await;
            }
        };

        if let Err(e) = self.bot.reply_to(message, MSG_GENERATING).await {
            warn!(error = %e, "Failed to send progress message");
        }

        let blob = match self.narrator.narrate_request(&request).await {
            Ok(blob) => blob,
            Err(e) => {
                error!(error = %e, "step: narration failed");
                return self.reply_and_stop(message, &e.user_message()).await;
            }
        };

        let wav_bytes = blob.len();
        let duration_secs = blob.duration_secs();
        if let Err(e) = self
            .bot
            .send_voice(&message.chat, blob.into_bytes(), self.caption.as_deref())
            .await
        {
            error!(error = %e, wav_bytes = wav_bytes, "step: voice delivery failed");
            let text = format!("{}: {}", MSG_SEND_FAILED, e);
            return self.reply_and_stop(message, &text).await;
        }

        info!(
            wav_bytes = wav_bytes,
            duration_secs = duration_secs,
            "step: narration delivered"
        );
        Ok(HandlerResponse::Stop)
    }
}
