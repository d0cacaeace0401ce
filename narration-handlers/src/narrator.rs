//! Narration core: validate the text, synthesize PCM, wrap it in WAV.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, instrument, warn};
use tts_client::SpeechSynthesizer;
use wav_encoder::{encode, EncodeError, PcmFormat, WavAudioBlob};

/// Length limit used when none is configured.
pub const DEFAULT_MAX_CHARS: usize = 2000;

/// Why a narration produced no audio. Every variant is terminal for the request.
#[derive(Error, Debug)]
pub enum NarrationError {
    #[error("Text is empty")]
    EmptyText,

    #[error("Text too long: {len} characters (max {max})")]
    TextTooLong { len: usize, max: usize },

    #[error("Speech synthesis failed: {0}")]
    SynthesisFailed(String),

    #[error("Synthesized audio could not be encoded: {0}")]
    EncodingInvalidInput(#[from] EncodeError),
}

impl NarrationError {
    /// Text shown to the end user; distinct per variant and keeps the cause.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyText => {
                "Please send me some text to narrate, e.g. \"Once upon a time...\"".to_string()
            }
            Self::TextTooLong { len, max } => format!(
                "Text too long! Split into parts (max ~{} chars, yours has {}).",
                max, len
            ),
            Self::SynthesisFailed(cause) => format!(
                "Oops, narration failed: {}\nMaybe try shorter text or try again later.",
                cause
            ),
            Self::EncodingInvalidInput(e) => {
                format!("Oops, the generated audio was malformed: {}", e)
            }
        }
    }
}

/// A validated narration input. Construct with [`NarrationRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationRequest {
    text: String,
}

impl NarrationRequest {
    /// Checks the length (in characters, untrimmed) against `max_chars`, then that the text is not blank.
    pub fn new(text: &str, max_chars: usize) -> Result<Self, NarrationError> {
        let len = text.chars().count();
        if len > max_chars {
            return Err(NarrationError::TextTooLong {
                len,
                max: max_chars,
            });
        }
        if text.trim().is_empty() {
            return Err(NarrationError::EmptyText);
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Runs one narration per call: validate → synthesize → encode. Either a complete WAV comes back
/// or a classified error; nothing is retried.
pub struct Narrator {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    max_chars: usize,
}

impl Narrator {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, max_chars: usize) -> Self {
        Self {
            synthesizer,
            max_chars,
        }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Validation step only; lets callers reject input before announcing work.
    pub fn validate(&self, text: &str) -> Result<NarrationRequest, NarrationError> {
        NarrationRequest::new(text, self.max_chars)
    }

    /// Full pipeline for raw text.
    pub async fn narrate(&self, text: &str) -> Result<WavAudioBlob, NarrationError> {
        let request = self.validate(text)?;
        self.narrate_request(&request).await
    }

    /// Synthesizes and encodes an already validated request.
    #[instrument(skip(self, request), fields(text_len = request.char_count()))]
    pub async fn narrate_request(
        &self,
        request: &NarrationRequest,
    ) -> Result<WavAudioBlob, NarrationError> {
        info!("step: narration synthesis started");

        let pcm = self
            .synthesizer
            .synthesize(request.text())
            .await
            .map_err(|e| {
                warn!(error = %format!("{:#}", e), "step: narration synthesis failed");
                NarrationError::SynthesisFailed(format!("{:#}", e))
            })?;

        if pcm.is_empty() {
            warn!("step: synthesis returned no audio");
            return Err(NarrationError::SynthesisFailed(
                "synthesis returned no audio".to_string(),
            ));
        }

        let blob = encode(&pcm, PcmFormat::NARRATION)?;
        info!(
            pcm_bytes = pcm.len(),
            wav_bytes = blob.len(),
            duration_secs = blob.duration_secs(),
            "step: narration encoded"
        );
        Ok(blob)
    }
}
