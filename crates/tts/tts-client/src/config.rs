//! Speech synthesis configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";
pub const DEFAULT_TTS_TIMEOUT_SECS: u64 = 120;

/// Configuration interface for a hosted speech model.
pub trait TtsConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    /// Upper bound the host puts around each synthesis call.
    fn timeout(&self) -> Duration;
}

/// TTS config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvTtsConfig {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub tts_model: String,
    pub tts_timeout_secs: u64,
}

impl TtsConfig for EnvTtsConfig {
    fn api_key(&self) -> &str {
        &self.gemini_api_key
    }
    fn base_url(&self) -> &str {
        &self.gemini_base_url
    }
    fn model(&self) -> &str {
        &self.tts_model
    }
    fn timeout(&self) -> Duration {
        Duration::from_secs(self.tts_timeout_secs)
    }
}

impl EnvTtsConfig {
    /// Load from environment: GEMINI_API_KEY (required), GEMINI_BASE_URL, TTS_MODEL, TTS_TIMEOUT_SECS.
    pub fn from_env() -> Result<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY").context("GEMINI_API_KEY not set")?;
        let gemini_base_url = env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string());
        let tts_model = env::var("TTS_MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TTS_MODEL.to_string());
        let tts_timeout_secs = match env::var("TTS_TIMEOUT_SECS") {
            Ok(s) => s
                .trim()
                .parse()
                .with_context(|| format!("TTS_TIMEOUT_SECS is not a number: {}", s))?,
            Err(_) => DEFAULT_TTS_TIMEOUT_SECS,
        };
        Ok(Self {
            gemini_api_key,
            gemini_base_url,
            tts_model,
            tts_timeout_secs,
        })
    }

    /// Fails on values that would make every request fail.
    pub fn validate(&self) -> Result<()> {
        if self.gemini_api_key.trim().is_empty() {
            anyhow::bail!("GEMINI_API_KEY is empty");
        }
        if self.tts_timeout_secs == 0 {
            anyhow::bail!("TTS_TIMEOUT_SECS must be greater than 0");
        }
        if !self.gemini_base_url.starts_with("http://")
            && !self.gemini_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "GEMINI_BASE_URL must be an http(s) URL: {}",
                self.gemini_base_url
            );
        }
        Ok(())
    }
}
