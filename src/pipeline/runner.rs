//! Recording pipeline — drives encode → persist → (optional) summarize.
//!
//! ```text
//! DecodedAudio
//!   └─▶ spawn_blocking(wav::encode)          → WavBytes
//!         └─▶ spawn_blocking(write_to)       → file on disk
//!               └─▶ Summarizer::summarize    → MeetingSummary   [optional]
//! ```
//!
//! Encoding and file I/O are pushed onto `tokio::task::spawn_blocking` so the
//! async runtime never stalls on a long recording.  A summary failure does
//! not undo the written file; it is reported in [`RecordingOutcome`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::audio::DecodedAudio;
use crate::summary::{MeetingSummary, Summarizer, SummaryError};
use crate::wav::{encode, WavBytes, WavError};

// ---------------------------------------------------------------------------
// PipelineError
// ---------------------------------------------------------------------------

/// Errors that abort the pipeline before a file is produced.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Encoding or writing the WAV file failed.
    #[error("encoding failed: {0}")]
    Encode(#[from] WavError),

    /// Internal / unexpected error (e.g. tokio join failure).
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<tokio::task::JoinError> for PipelineError {
    fn from(e: tokio::task::JoinError) -> Self {
        PipelineError::Internal(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// RecordingOutcome
// ---------------------------------------------------------------------------

/// What one pipeline run produced.
#[derive(Debug)]
pub struct RecordingOutcome {
    /// Where the WAV file was written.
    pub path: PathBuf,
    /// The encoded file.
    pub wav: WavBytes,
    /// `None` when no summarizer is configured.
    pub summary: Option<Result<MeetingSummary, SummaryError>>,
}

// ---------------------------------------------------------------------------
// RecordingPipeline
// ---------------------------------------------------------------------------

/// Turns a decoded recording into a WAV file and, optionally, a summary.
///
/// ```rust,no_run
/// use std::path::Path;
/// use std::sync::Arc;
/// use meeting_audio::audio::DecodedAudio;
/// use meeting_audio::config::AppConfig;
/// use meeting_audio::pipeline::RecordingPipeline;
/// use meeting_audio::summary::HttpSummarizer;
///
/// # async fn example() {
/// let config = AppConfig::default();
/// let pipeline = RecordingPipeline::new(Some(Arc::new(HttpSummarizer::from_config(
///     &config.summary,
/// ))));
///
/// let audio = DecodedAudio::new(16_000, vec![vec![0.0; 16_000]]).unwrap();
/// let outcome = pipeline.process(audio, Path::new("meeting_audio.wav")).await.unwrap();
/// # }
/// ```
pub struct RecordingPipeline {
    summarizer: Option<Arc<dyn Summarizer>>,
}

impl RecordingPipeline {
    /// Create a pipeline.  Pass `None` to skip the summary upload.
    pub fn new(summarizer: Option<Arc<dyn Summarizer>>) -> Self {
        Self { summarizer }
    }

    /// Encode `audio`, write it to `output`, then summarize it if a
    /// summarizer is configured.
    pub async fn process(
        &self,
        audio: DecodedAudio,
        output: &Path,
    ) -> Result<RecordingOutcome, PipelineError> {
        log::debug!(
            "pipeline: encoding {:.2}s of {}-channel audio",
            audio.duration_secs(),
            audio.channel_count()
        );

        // ── 1. Encode + persist (blocking → thread pool) ─────────────────
        let path = output.to_path_buf();
        let write_path = path.clone();
        let wav = tokio::task::spawn_blocking(move || -> Result<WavBytes, WavError> {
            let wav = encode(&audio)?;
            wav.write_to(&write_path)?;
            Ok(wav)
        })
        .await??;

        // ── 2. Summary upload ────────────────────────────────────────────
        let summary = match &self.summarizer {
            Some(summarizer) => {
                let result = summarizer.summarize(&wav).await;
                if let Err(e) = &result {
                    log::warn!("pipeline: summary unavailable ({e}); WAV file kept");
                }
                Some(result)
            }
            None => {
                log::debug!("pipeline: no summarizer configured, skipping upload");
                None
            }
        };

        Ok(RecordingOutcome { path, wav, summary })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
