//! PCM sample layout.

use crate::error::EncodeError;

/// Layout of interleaved linear PCM samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    pub channels: u16,
    pub sample_width_bytes: u16,
    pub sample_rate_hz: u32,
}

impl PcmFormat {
    /// Mono, 16-bit, 24 kHz: what the speech model returns.
    pub const NARRATION: PcmFormat = PcmFormat {
        channels: 1,
        sample_width_bytes: 2,
        sample_rate_hz: 24_000,
    };

    pub const fn new(channels: u16, sample_width_bytes: u16, sample_rate_hz: u32) -> Self {
        Self {
            channels,
            sample_width_bytes,
            sample_rate_hz,
        }
    }

    /// Bytes per frame (one sample for every channel); the WAV block align.
    pub fn frame_size(&self) -> usize {
        usize::from(self.channels) * usize::from(self.sample_width_bytes)
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.sample_width_bytes * 8
    }

    pub fn byte_rate(&self) -> u32 {
        self.sample_rate_hz * u32::from(self.channels) * u32::from(self.sample_width_bytes)
    }

    /// Checks every field is usable and that derived header fields fit their widths.
    pub fn validate(&self) -> Result<(), EncodeError> {
        if self.channels == 0 {
            return Err(EncodeError::InvalidFormat("channels must be at least 1"));
        }
        if self.sample_width_bytes == 0 {
            return Err(EncodeError::InvalidFormat("sample width must be at least 1 byte"));
        }
        if self.sample_rate_hz == 0 {
            return Err(EncodeError::InvalidFormat("sample rate must be positive"));
        }
        if self.sample_width_bytes.checked_mul(8).is_none()
            || u16::try_from(self.frame_size()).is_err()
        {
            return Err(EncodeError::InvalidFormat("frame size exceeds 16 bits"));
        }
        let byte_rate = u64::from(self.sample_rate_hz) * self.frame_size() as u64;
        if u32::try_from(byte_rate).is_err() {
            return Err(EncodeError::InvalidFormat("byte rate exceeds 32 bits"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narration_format_fields() {
        let f = PcmFormat::NARRATION;
        assert_eq!(f.frame_size(), 2);
        assert_eq!(f.bits_per_sample(), 16);
        assert_eq!(f.byte_rate(), 48_000);
        assert!(f.validate().is_ok());
    }

    #[test]
    fn test_zero_fields_rejected() {
        assert!(PcmFormat::new(0, 2, 24_000).validate().is_err());
        assert!(PcmFormat::new(1, 0, 24_000).validate().is_err());
        assert!(PcmFormat::new(1, 2, 0).validate().is_err());
    }

    #[test]
    fn test_overflowing_fields_rejected() {
        assert!(PcmFormat::new(u16::MAX, 4, 8_000).validate().is_err());
        assert!(PcmFormat::new(8, 4, u32::MAX).validate().is_err());
    }
}
