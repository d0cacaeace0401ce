//! Greeting for `/start` and `/help`.

use async_trait::async_trait;
use narrator_core::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

pub const DEFAULT_GREETING: &str = "Hello! Send me English fairy tale text, and I'll narrate it with Gemini 2.5 magic voice! ✨\nExample: Once upon a time...";

const COMMANDS: &[&str] = &["start", "help"];

/// Answers the start/help commands and ends the chain; any other message continues.
pub struct StartHandler {
    bot: Arc<dyn CoreBot>,
    greeting: String,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn CoreBot>) -> Self {
        Self {
            bot,
            greeting: DEFAULT_GREETING.to_string(),
        }
    }

    pub fn with_greeting(mut self, greeting: String) -> Self {
        self.greeting = greeting;
        self
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match message.command() {
            Some(command) if COMMANDS.contains(&command) => {
                info!(user_id = message.user.id, command = %command, "Answering command");
                self.bot.reply_to(message, &self.greeting).await?;
                Ok(HandlerResponse::Reply(self.greeting.clone()))
            }
            _ => Ok(HandlerResponse::Continue),
        }
    }
}
