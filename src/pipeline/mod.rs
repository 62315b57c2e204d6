//! Recording pipeline — wires the WAV encoder, file output and the optional
//! summary upload.
//!
//! ```text
//! DecodedAudio → RecordingPipeline::process()  ← async tokio task
//!                    ├─ spawn_blocking(encode + write_to)
//!                    └─ Summarizer::summarize (optional)
//! ```

pub mod runner;

pub use runner::{PipelineError, RecordingOutcome, RecordingPipeline};
