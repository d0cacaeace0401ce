//! # Speech synthesis abstraction
//!
//! Defines the [`SpeechSynthesizer`] capability the narration handler depends on, the
//! [`TimeoutSynthesizer`] decorator hosts use to bound a slow provider, and env-based
//! [`TtsConfig`]. Provider implementations (e.g. gemini-tts-client) live in their own crates.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

mod config;

pub use config::{
    EnvTtsConfig, TtsConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_TTS_MODEL, DEFAULT_TTS_TIMEOUT_SECS,
};

/// Text-to-speech capability: returns raw little-endian linear PCM for `text`.
///
/// Errors are opaque to callers; their `Display` text is the failure reason shown to users.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>>;
}

#[async_trait]
impl<S: SpeechSynthesizer + ?Sized> SpeechSynthesizer for Arc<S> {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        (**self).synthesize(text).await
    }
}

/// Fails a synthesis call that does not finish within `timeout`. Dropping the pending call
/// cancels the underlying request.
pub struct TimeoutSynthesizer<S> {
    inner: S,
    timeout: Duration,
}

impl<S: SpeechSynthesizer> TimeoutSynthesizer<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl<S: SpeechSynthesizer> SpeechSynthesizer for TimeoutSynthesizer<S> {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        match tokio::time::timeout(self.timeout, self.inner.synthesize(text)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs(), "step: speech synthesis timed out");
                anyhow::bail!(
                    "speech synthesis timed out after {}s",
                    self.timeout.as_secs()
                )
            }
        }
    }
}

/// Masks an API key for safe logging: first 7 chars + "***" + last 4 chars.
/// Keys of length <= 11 become "***" so no part of them leaks.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_ascii() {
        return "***".to_string();
    }
    format!("{}***{}", &token[..7], &token[len - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct SlowSynthesizer {
        delay: Duration,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SpeechSynthesizer for SlowSynthesizer {
        async fn synthesize(&self, _text: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            Ok(vec![0u8; 4])
        }
    }

    /// **Test: A call slower than the timeout fails with the timeout reason.**
    #[tokio::test(start_paused = true)]
    async fn test_timeout_elapses() {
        let synth = TimeoutSynthesizer::new(
            SlowSynthesizer {
                delay: Duration::from_secs(300),
                calls: AtomicUsize::new(0),
            },
            Duration::from_secs(120),
        );
        let err = synth.synthesize("Once upon a time").await.unwrap_err();
        assert_eq!(err.to_string(), "speech synthesis timed out after 120s");
        assert_eq!(synth.inner.calls.load(Ordering::SeqCst), 1);
    }

    /// **Test: A call inside the timeout passes the audio through unchanged.**
    #[tokio::test(start_paused = true)]
    async fn test_timeout_not_reached() {
        let synth = TimeoutSynthesizer::new(
            SlowSynthesizer {
                delay: Duration::from_secs(1),
                calls: AtomicUsize::new(0),
            },
            Duration::from_secs(120),
        );
        assert_eq!(synth.synthesize("hi").await.unwrap(), vec![0u8; 4]);
    }

    /// **Test: Arc-wrapped synthesizers can be used through the trait.**
    #[tokio::test]
    async fn test_arc_forwarding() {
        let inner: Arc<dyn SpeechSynthesizer> = Arc::new(SlowSynthesizer {
            delay: Duration::from_millis(0),
            calls: AtomicUsize::new(0),
        });
        let synth = TimeoutSynthesizer::new(inner, Duration::from_secs(1));
        assert_eq!(synth.synthesize("hi").await.unwrap().len(), 4);
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token(""), "***");
        assert_eq!(mask_token("AIzaSy12"), "***");
        assert_eq!(mask_token("AIzaSyAbcdefghijklmnop"), "AIzaSyA***mnop");
    }
}
