//! # Handler chain
//!
//! Routes each inbound message through an ordered list of handlers. All `before` hooks run in order
//! (any false stops the chain); then `handle` runs until one handler returns Stop or Reply; then all
//! `after` hooks run in reverse with the final response. The narrator bot uses it to put command
//! routing (`/start`, `/help`) in front of narration.

use narrator_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

/// Short label and reply length used in step logs.
fn describe(response: &HandlerResponse) -> (&'static str, Option<usize>) {
    match response {
        HandlerResponse::Continue => ("Continue", None),
        HandlerResponse::Stop => ("Stop", None),
        HandlerResponse::Reply(text) => ("Reply", Some(text.len())),
    }
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the three phases for one message and returns the response that ended the handle phase
    /// (Continue if no handler claimed the message).
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(message_id = %message.id, "step: handler_chain started");

        for handler in &self.handlers {
            let name = std::any::type_name_of_val(handler.as_ref());
            if !handler.before(message).await? {
                info!(handler = %name, "step: before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
            debug!(handler = %name, "step: handler before done");
        }

        let mut final_response = HandlerResponse::Continue;
        for handler in &self.handlers {
            let name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(message).await?;
            let (response_type, reply_len) = describe(&response);
            info!(
                handler = %name,
                response_type = %response_type,
                reply_len = ?reply_len,
                "step: handler handle done"
            );
            if response != HandlerResponse::Continue {
                final_response = response;
                break;
            }
        }

        for handler in self.handlers.iter().rev() {
            let name = std::any::type_name_of_val(handler.as_ref());
            handler.after(message, &final_response).await?;
            debug!(handler = %name, "step: handler after done");
        }

        info!(message_id = %message.id, "step: handler_chain finished");
        Ok(final_response)
    }
}

// Tests live in tests/handler_chain_test.rs
