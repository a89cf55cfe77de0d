//! Error types for the sampling demo

use thiserror::Error;

/// Errors surfaced by the demo library
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("sampling rate {hz} Hz is outside [{min}, {max}] Hz")]
    SamplingRateOutOfRange { hz: u32, min: u32, max: u32 },

    #[error("audio error: {0}")]
    Audio(String),

    #[error("WAV export failed: {0}")]
    Wav(#[from] hound::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for demo operations
pub type Result<T> = std::result::Result<T, DemoError>;
