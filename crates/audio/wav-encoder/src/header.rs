//! Canonical 44-byte RIFF/WAVE header: write and read back.

use crate::error::WavParseError;
use crate::format::PcmFormat;

/// Size of the canonical header that precedes the PCM payload.
pub const WAV_HEADER_LEN: usize = 44;

/// RIFF chunk size minus data length: "WAVE" + fmt chunk (8 + 16) + data chunk header (8).
pub(crate) const RIFF_OVERHEAD: u32 = 36;

const FMT_CHUNK_LEN: u32 = 16;
const FORMAT_PCM: u16 = 1;

pub(crate) fn write(out: &mut Vec<u8>, format: PcmFormat, data_len: u32) {
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(RIFF_OVERHEAD + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
    out.extend_from_slice(&FORMAT_PCM.to_le_bytes());
    out.extend_from_slice(&format.channels.to_le_bytes());
    out.extend_from_slice(&format.sample_rate_hz.to_le_bytes());
    out.extend_from_slice(&format.byte_rate().to_le_bytes());
    out.extend_from_slice(&(format.frame_size() as u16).to_le_bytes());
    out.extend_from_slice(&format.bits_per_sample().to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
}

/// Fields of a canonical PCM WAV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub riff_len: u32,
    pub audio_format: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_len: u32,
}

fn u16_at(data: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([data[pos], data[pos + 1]])
}

fn u32_at(data: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
}

impl WavHeader {
    /// Parses the canonical layout written by [`crate::encode`] and checks the declared
    /// data size against the bytes that follow.
    pub fn parse(data: &[u8]) -> Result<Self, WavParseError> {
        if data.len() < WAV_HEADER_LEN {
            return Err(WavParseError::TooShort(data.len()));
        }
        if &data[0..4] != b"RIFF" {
            return Err(WavParseError::MissingMarker("RIFF"));
        }
        if &data[8..12] != b"WAVE" {
            return Err(WavParseError::MissingMarker("WAVE"));
        }
        if &data[12..16] != b"fmt " {
            return Err(WavParseError::MissingMarker("fmt "));
        }
        let fmt_len = u32_at(data, 16);
        let audio_format = u16_at(data, 20);
        if fmt_len != FMT_CHUNK_LEN || audio_format != FORMAT_PCM {
            return Err(WavParseError::Unsupported(fmt_len, audio_format));
        }
        if &data[36..40] != b"data" {
            return Err(WavParseError::MissingMarker("data"));
        }

        let header = Self {
            riff_len: u32_at(data, 4),
            audio_format,
            channels: u16_at(data, 22),
            sample_rate: u32_at(data, 24),
            byte_rate: u32_at(data, 28),
            block_align: u16_at(data, 32),
            bits_per_sample: u16_at(data, 34),
            data_len: u32_at(data, 40),
        };

        let actual = data.len() - WAV_HEADER_LEN;
        if header.data_len as usize != actual {
            return Err(WavParseError::DataSizeMismatch {
                declared: header.data_len,
                actual,
            });
        }
        Ok(header)
    }

    pub fn format(&self) -> PcmFormat {
        PcmFormat::new(self.channels, self.bits_per_sample / 8, self.sample_rate)
    }
}
