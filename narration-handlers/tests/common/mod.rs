//! Test doubles shared by the narration-handlers integration tests.
//!
//! [`MockBot`] records what would be delivered to Telegram; [`StubSynthesizer`] returns a canned
//! result and counts how often the speech model was called.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use narrator_core::{Bot, BotError, Chat, Message, MessageDirection, Result, User};
use tts_client::SpeechSynthesizer;

/// One outbound call seen by [`MockBot`].
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Voice { chat_id: i64, audio: Vec<u8>, caption: Option<String> },
}

#[derive(Default)]
pub struct MockBot {
    pub sent: Mutex<Vec<Sent>>,
    /// When set, `send_voice` fails with this reason.
    pub voice_error: Option<String>,
}

impl MockBot {
    pub fn failing_voice(reason: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            voice_error: Some(reason.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { text, .. } => Some(text),
                Sent::Voice { .. } => None,
            })
            .collect()
    }

    pub fn voices(&self) -> Vec<(Vec<u8>, Option<String>)> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Voice { audio, caption, .. } => Some((audio, caption)),
                Sent::Text { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_voice(&self, chat: &Chat, audio: Vec<u8>, caption: Option<&str>) -> Result<()> {
        if let Some(reason) = &self.voice_error {
            return Err(BotError::Bot(reason.clone()));
        }
        self.sent.lock().unwrap().push(Sent::Voice {
            chat_id: chat.id,
            audio,
            caption: caption.map(str::to_string),
        });
        Ok(())
    }
}

/// Canned synthesis result plus a call counter.
pub struct StubSynthesizer {
    result: std::result::Result<Vec<u8>, String>,
    pub calls: AtomicUsize,
    pub last_text: Mutex<Option<String>>,
}

impl StubSynthesizer {
    pub fn returning(pcm: Vec<u8>) -> Self {
        Self {
            result: Ok(pcm),
            calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            result: Err(reason.to_string()),
            calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechSynthesizer for StubSynthesizer {
    async fn synthesize(&self, text: &str) -> anyhow::Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(text.to_string());
        self.result.clone().map_err(|reason| anyhow::anyhow!(reason))
    }
}

pub fn text_message(content: &str) -> Message {
    Message {
        id: "42".to_string(),
        user: User {
            id: 1001,
            username: Some("reader".to_string()),
            first_name: Some("Alice".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 2002,
            chat_type: "Private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    }
}

/// One second of 24 kHz mono 16-bit audio: 24000 samples, 48000 bytes.
pub fn one_second_pcm() -> Vec<u8> {
    (0..24_000u32)
        .flat_map(|i| ((i % 200) as i16 * 100 - 10_000).to_le_bytes())
        .collect()
}
