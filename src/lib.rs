//! meeting-audio — encode decoded meeting recordings as 16-bit PCM WAV files
//! and hand them to a summarization service.
//!
//! * [`audio`] — decoded input, interleaving, quantization.
//! * [`wav`] — RIFF/WAVE header and the [`wav::encode`] entry point.
//! * [`summary`] — upload client and action-item extraction.
//! * [`pipeline`] — encode → write → summarize orchestration.
//! * [`config`] — TOML settings and platform paths.

pub mod audio;
pub mod config;
pub mod pipeline;
pub mod summary;
pub mod wav;
