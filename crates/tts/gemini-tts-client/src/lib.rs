//! # Gemini speech synthesis
//!
//! Implements [`tts_client::SpeechSynthesizer`] on top of the Gemini `generateContent` endpoint with
//! the `AUDIO` response modality. The model answers with base64 inline data holding raw 16-bit
//! little-endian PCM (mono, 24 kHz); this client decodes it and returns the bytes as-is.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gemini_tts_client::GeminiTtsClient;
//! use tts_client::SpeechSynthesizer;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let client = GeminiTtsClient::new("your-api-key".to_string());
//!     let pcm = client.synthesize("Once upon a time...").await?;
//!     println!("{} bytes of PCM", pcm.len());
//!     Ok(())
//! }
//! ```
//!
//! Timeouts are not applied here; wrap the client in [`tts_client::TimeoutSynthesizer`].

use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use tts_client::{mask_token, SpeechSynthesizer, DEFAULT_GEMINI_BASE_URL, DEFAULT_TTS_MODEL};

/// Gemini TTS client. Cheap to clone (shares the HTTP connection pool).
#[derive(Debug, Clone)]
pub struct GeminiTtsClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiTtsClient {
    /// Creates a client for the public endpoint and the default TTS model.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_GEMINI_BASE_URL.to_string())
    }

    /// Creates a client against a custom base URL (proxies, test servers).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: DEFAULT_TTS_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [TextPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: [&'static str; 1],
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// True for the raw PCM mime types the model emits (`audio/L16;codec=pcm;rate=24000`).
fn is_raw_pcm(mime_type: &str) -> bool {
    let essence = mime_type.split(';').next().unwrap_or("").trim();
    mime_type.is_empty()
        || essence.eq_ignore_ascii_case("audio/L16")
        || essence.eq_ignore_ascii_case("audio/pcm")
}

/// Extracts and decodes the first audio part of a response.
fn decode_audio(response: GenerateContentResponse) -> Result<Vec<u8>> {
    let inline = response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.inline_data)
        .context("No audio payload in response")?;

    if !is_raw_pcm(&inline.mime_type) {
        anyhow::bail!("Unexpected audio format in response: {}", inline.mime_type);
    }
    debug!(mime_type = %inline.mime_type, "Gemini inline audio received");

    base64::engine::general_purpose::STANDARD
        .decode(inline.data.as_bytes())
        .context("Invalid base64 audio payload")
}

#[async_trait]
impl SpeechSynthesizer for GeminiTtsClient {
    /// Sends `text` to the model and returns the decoded PCM bytes.
    ///
    /// # Errors
    ///
    /// - transport failures (DNS, TLS, connection reset)
    /// - non-2xx status; the API's `error.message` is used as the reason when present
    /// - a response without an inline audio part, or with a non-PCM mime type
    /// - an undecodable base64 payload
    #[instrument(skip(self, text), fields(model = %self.model, text_len = text.chars().count()))]
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        info!(
            api_key = %mask_token(&self.api_key),
            text_preview = %text.chars().take(100).collect::<String>(),
            "step: Gemini TTS request"
        );

        let request = GenerateContentRequest {
            contents: [Content {
                parts: [TextPart { text }],
            }],
            generation_config: GenerationConfig {
                response_modalities: ["AUDIO"],
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("Gemini TTS request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            anyhow::bail!("Gemini TTS API error ({}): {}", status, reason);
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini TTS response")?;
        let pcm = decode_audio(parsed)?;

        info!(pcm_bytes = pcm.len(), "step: Gemini TTS response decoded");
        Ok(pcm)
    }
}
