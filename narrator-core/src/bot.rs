//! Delivery channel abstraction for sending text and voice messages.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in narrator-telegram.

use crate::error::{BotError, Result};
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Largest file a bot may upload through the Bot API (50 MB).
pub const MAX_VOICE_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Abstraction for outbound messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Delivers `audio` (a complete WAV file) as a voice message with an optional caption.
    async fn send_voice(&self, chat: &Chat, audio: Vec<u8>, caption: Option<&str>) -> Result<()>;
}

/// Rejects audio that cannot be uploaded, before any network call is made.
pub fn check_upload_size(size: usize) -> Result<()> {
    if size > MAX_VOICE_UPLOAD_BYTES {
        return Err(BotError::PayloadTooLarge {
            size,
            limit: MAX_VOICE_UPLOAD_BYTES,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_upload_size_within_limit() {
        assert!(check_upload_size(0).is_ok());
        assert!(check_upload_size(44 + 48_000).is_ok());
        assert!(check_upload_size(MAX_VOICE_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn test_check_upload_size_over_limit() {
        match check_upload_size(MAX_VOICE_UPLOAD_BYTES + 1) {
            Err(BotError::PayloadTooLarge { size, limit }) => {
                assert_eq!(size, MAX_VOICE_UPLOAD_BYTES + 1);
                assert_eq!(limit, MAX_VOICE_UPLOAD_BYTES);
            }
            other => panic!("expected PayloadTooLarge, got {:?}", other),
        }
    }
}
