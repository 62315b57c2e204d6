//! Error type shared by every stage of the WAV encoder.

use thiserror::Error;

// ---------------------------------------------------------------------------
// WavError
// ---------------------------------------------------------------------------

/// Reason a buffer could not be turned into (or read back from) a WAV file.
///
/// Every variant is detected before any output is produced, so an `Err` never
/// comes with a partially written buffer.
#[derive(Debug, Error)]
pub enum WavError {
    /// Zero channels, channels of unequal length, or an interleaved stream
    /// that does not divide evenly into frames.
    #[error("invalid channel layout: {0}")]
    InvalidChannelLayout(String),

    /// A header field cannot be encoded (e.g. a zero sample rate).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The PCM payload does not fit into a 32-bit RIFF chunk size.
    #[error("payload too large: {bytes} bytes (maximum {max} bytes)")]
    PayloadTooLarge { bytes: u64, max: u64 },

    /// Bytes handed to [`WavHeader::parse`](super::WavHeader::parse) are not a
    /// canonical 44-byte PCM header.
    #[error("malformed WAV header: {0}")]
    MalformedHeader(String),

    /// Writing the encoded file to disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
