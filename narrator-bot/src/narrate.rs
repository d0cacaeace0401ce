//! Offline narration: synthesize text with the configured model and write the WAV to disk.

use anyhow::{Context, Result};
use narration_handlers::Narrator;
use std::path::Path;
use tracing::info;
use wav_encoder::WavHeader;

/// Narrates `text` and writes the WAV file to `output`. Returns the header of the written file.
pub async fn narrate_to_file(narrator: &Narrator, text: &str, output: &Path) -> Result<WavHeader> {
    let blob = narrator
        .narrate(text)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let header = WavHeader::parse(blob.as_bytes()).context("Encoded WAV has an invalid header")?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(output, blob.as_bytes())
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        path = %output.display(),
        wav_bytes = blob.len(),
        duration_secs = blob.duration_secs(),
        "Narration written"
    );
    Ok(header)
}

/// One-line summary printed by the CLI.
pub fn describe(header: &WavHeader) -> String {
    let format = header.format();
    let duration = f64::from(header.data_len) / f64::from(format.byte_rate());
    format!(
        "{} Hz, {} channel(s), {}-bit, {:.2}s",
        format.sample_rate_hz,
        format.channels,
        format.bits_per_sample(),
        duration
    )
}
