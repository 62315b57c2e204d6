//! Upload of encoded recordings to the meeting summarization service.
//!
//! This module provides:
//! * [`Summarizer`] — async trait implemented by summarization backends.
//! * [`HttpSummarizer`] — multipart upload to `{base_url}/upload-audio/`.
//! * [`MeetingSummary`] — summary text plus action items.
//! * [`extract_action_items`] — keyword-based action-item extraction.
//! * [`SummaryError`] — error variants for the upload.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use meeting_audio::audio::DecodedAudio;
//! use meeting_audio::config::AppConfig;
//! use meeting_audio::summary::{HttpSummarizer, Summarizer};
//! use meeting_audio::wav::encode;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let summarizer = HttpSummarizer::from_config(&config.summary);
//!
//!     let audio = DecodedAudio::new(16_000, vec![vec![0.0; 16_000]]).unwrap();
//!     let wav = encode(&audio).unwrap();
//!
//!     let summary = summarizer.summarize(&wav).await.unwrap();
//!     print!("{}", summary.render());
//! }
//! ```

pub mod client;
pub mod report;

pub use client::{HttpSummarizer, SummaryError, Summarizer};
pub use report::{extract_action_items, MeetingSummary};
