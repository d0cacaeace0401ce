use thiserror::Error;

/// Caller errors rejected before any bytes are produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Invalid PCM format: {0}")]
    InvalidFormat(&'static str),

    #[error("PCM payload of {len} bytes is not a multiple of the {frame_size}-byte frame size")]
    MisalignedPayload { len: usize, frame_size: usize },

    #[error("PCM payload of {len} bytes does not fit in a WAV container")]
    PayloadTooLarge { len: usize },
}

/// Errors reading back a canonical WAV header.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WavParseError {
    #[error("WAV data too short: {0} bytes")]
    TooShort(usize),

    #[error("Invalid WAV: missing {0} marker")]
    MissingMarker(&'static str),

    #[error("Unsupported WAV: fmt chunk size {0}, audio format {1}")]
    Unsupported(u32, u16),

    #[error("Declared data size {declared} does not match payload length {actual}")]
    DataSizeMismatch { declared: u32, actual: usize },
}
