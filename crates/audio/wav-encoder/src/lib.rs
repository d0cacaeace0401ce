//! # WAV encoder
//!
//! Packs raw little-endian linear PCM into a canonical 44-byte-header WAV container, entirely in
//! memory. [`encode`] is a pure function: no I/O, and identical inputs give byte-identical output.
//!
//! ```
//! use wav_encoder::{encode, PcmFormat, WAV_HEADER_LEN};
//!
//! let pcm = vec![0u8; 48_000]; // one second of 24 kHz mono 16-bit silence
//! let blob = encode(&pcm, PcmFormat::NARRATION).unwrap();
//! assert_eq!(blob.len(), WAV_HEADER_LEN + 48_000);
//! assert_eq!(blob.duration_secs(), 1.0);
//! ```

mod error;
mod format;
mod header;

pub use error::{EncodeError, WavParseError};
pub use format::PcmFormat;
pub use header::{WavHeader, WAV_HEADER_LEN};

/// An encoded WAV file: header followed by the unmodified PCM payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavAudioBlob {
    bytes: Vec<u8>,
    format: PcmFormat,
}

impl WavAudioBlob {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Hands the bytes to the delivery channel.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Total length including the header.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: even an empty payload carries a header.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Length of the PCM payload (the declared data-chunk size).
    pub fn data_len(&self) -> usize {
        self.bytes.len() - WAV_HEADER_LEN
    }

    pub fn format(&self) -> PcmFormat {
        self.format
    }

    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.data_len() as f64 / f64::from(self.format.byte_rate())
    }
}

/// Wraps `pcm` in a WAV container described by `format`.
///
/// `pcm.len()` must be a whole number of frames (`channels × sample_width_bytes`); a partial
/// trailing frame is rejected, never truncated. An empty payload is valid and yields a
/// header-only file with a zero-length data chunk.
pub fn encode(pcm: &[u8], format: PcmFormat) -> Result<WavAudioBlob, EncodeError> {
    format.validate()?;

    let frame_size = format.frame_size();
    if pcm.len() % frame_size != 0 {
        return Err(EncodeError::MisalignedPayload {
            len: pcm.len(),
            frame_size,
        });
    }

    let data_len = u32::try_from(pcm.len())
        .ok()
        .filter(|len| len.checked_add(header::RIFF_OVERHEAD).is_some())
        .ok_or(EncodeError::PayloadTooLarge { len: pcm.len() })?;

    let mut bytes = Vec::with_capacity(WAV_HEADER_LEN + pcm.len());
    header::write(&mut bytes, format, data_len);
    bytes.extend_from_slice(pcm);

    Ok(WavAudioBlob { bytes, format })
}
