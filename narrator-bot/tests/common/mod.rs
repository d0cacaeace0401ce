//! Shared setup for narrator-bot integration tests: env-based config pointed at a mock Gemini
//! server, a recording Bot, and message builders.

#![allow(dead_code)]

use std::env;
use std::sync::{Mutex, Once};

use async_trait::async_trait;
use chrono::Utc;
use narrator_bot::BotConfig;
use narrator_core::{Bot, Chat, Message, MessageDirection, Result, User};
use tracing_subscriber::{fmt, EnvFilter};

pub const TEST_KEY: &str = "test-gemini-key-0123456789";
pub const MODEL_PATH: &str = "/models/gemini-2.5-flash-preview-tts:generateContent";

/// Gemini response carrying base64 "AAABAAIA" (PCM bytes 0,0,1,0,2,0).
pub const AUDIO_RESPONSE: &str = r#"{
    "candidates": [{
        "content": {
            "parts": [{"inlineData": {"mimeType": "audio/L16;codec=pcm;rate=24000", "data": "AAABAAIA"}}]
        }
    }]
}"#;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing once per test process; `RUST_LOG` controls the level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = fmt().with_env_filter(env_filter).with_test_writer().try_init();
    });
}

/// Sets the env a test bot needs and loads BotConfig. Gemini calls go to `gemini_url`.
pub fn setup_test_config(gemini_url: &str) -> BotConfig {
    for key in [
        "API_TOKEN",
        "TELEGRAM_API_URL",
        "TELOXIDE_API_URL",
        "WEBHOOK_URL",
        "RENDER_EXTERNAL_HOSTNAME",
        "PORT",
        "TTS_MODEL",
        "TTS_TIMEOUT_SECS",
        "NARRATION_MAX_CHARS",
        "NARRATION_CAPTION",
    ] {
        env::remove_var(key);
    }
    env::set_var("BOT_TOKEN", "123456:test_bot_token");
    env::set_var("GEMINI_API_KEY", TEST_KEY);
    env::set_var("GEMINI_BASE_URL", gemini_url);

    BotConfig::load(None).expect("BotConfig::load must succeed in test setup")
}

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text(String),
    Voice { audio: Vec<u8>, caption: Option<String> },
}

/// Records outbound calls instead of talking to Telegram.
#[derive(Default)]
pub struct RecordingBot {
    pub sent: Mutex<Vec<Sent>>,
}

impl RecordingBot {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Text(text.to_string()));
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_voice(&self, _chat: &Chat, audio: Vec<u8>, caption: Option<&str>) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Voice {
            audio,
            caption: caption.map(str::to_string),
        });
        Ok(())
    }
}

pub fn text_message(content: &str) -> Message {
    Message {
        id: "7".to_string(),
        user: User {
            id: 501,
            username: Some("listener".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 501,
            chat_type: "Private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    }
}
