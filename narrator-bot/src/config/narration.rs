//! Narration policy: NARRATION_MAX_CHARS and NARRATION_CAPTION.

use anyhow::{Context, Result};
use narration_handlers::{DEFAULT_CAPTION, DEFAULT_MAX_CHARS};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationConfig {
    pub max_chars: usize,
    /// Caption for the voice message; an empty NARRATION_CAPTION disables it.
    pub caption: Option<String>,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            caption: Some(DEFAULT_CAPTION.to_string()),
        }
    }
}

impl NarrationConfig {
    pub fn from_env() -> Result<Self> {
        let max_chars = match env::var("NARRATION_MAX_CHARS") {
            Ok(s) => s
                .trim()
                .parse()
                .with_context(|| format!("NARRATION_MAX_CHARS is not a number: {}", s))?,
            Err(_) => DEFAULT_MAX_CHARS,
        };
        let caption = match env::var("NARRATION_CAPTION") {
            Ok(s) if s.trim().is_empty() => None,
            Ok(s) => Some(s),
            Err(_) => Some(DEFAULT_CAPTION.to_string()),
        };
        Ok(Self { max_chars, caption })
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_chars == 0 {
            anyhow::bail!("NARRATION_MAX_CHARS must be greater than 0");
        }
        Ok(())
    }
}
