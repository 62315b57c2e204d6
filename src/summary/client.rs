//! Core `Summarizer` trait and `HttpSummarizer` implementation.
//!
//! `HttpSummarizer` posts an encoded recording as a multipart `file` field to
//! `{base_url}/upload-audio/` and reads back the summary.  All connection
//! details come from [`SummaryConfig`]; nothing is hardcoded.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::config::SummaryConfig;
use crate::wav::{WavBytes, WAV_CONTENT_TYPE};

use super::report::{extract_action_items, MeetingSummary};

// ---------------------------------------------------------------------------
// SummaryError
// ---------------------------------------------------------------------------

/// Errors that can occur while uploading a recording for summarization.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("summary request timed out")]
    Timeout,

    /// The response body could not be parsed as expected JSON.
    #[error("failed to parse summary response: {0}")]
    Parse(String),

    /// The service reported a failure via its `detail` field.
    #[error("summary service error ({status}): {detail}")]
    Server { status: u16, detail: String },

    /// The service answered successfully but without a summary.
    #[error("summary service returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for SummaryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SummaryError::Timeout
        } else {
            SummaryError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Summarizer trait
// ---------------------------------------------------------------------------

/// Async trait for turning a recording into a [`MeetingSummary`].
///
/// Implementors must be `Send + Sync` so they can be shared as
/// `Arc<dyn Summarizer>`.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, wav: &WavBytes) -> Result<MeetingSummary, SummaryError>;
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// Union of the success (`summary`, `action_items`) and failure (`detail`)
/// bodies.  The service reports some internal failures with status 200 and
/// only a `detail` field.
#[derive(Debug, Default, Deserialize)]
struct UploadResponse {
    summary: Option<String>,
    action_items: Option<Vec<String>>,
    detail: Option<String>,
}

/// Interpret a response body given its HTTP status.
pub(crate) fn parse_response(status: u16, body: &str) -> Result<MeetingSummary, SummaryError> {
    let success = (200..300).contains(&status);

    let parsed: UploadResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) if !success => {
            return Err(SummaryError::Server {
                status,
                detail: body.trim().to_string(),
            })
        }
        Err(e) => return Err(SummaryError::Parse(e.to_string())),
    };

    match parsed {
        UploadResponse {
            summary: Some(summary),
            action_items,
            ..
        } if success => {
            let action_items = action_items.unwrap_or_else(|| extract_action_items(&summary));
            Ok(MeetingSummary {
                summary,
                action_items,
            })
        }
        UploadResponse {
            detail: Some(detail),
            ..
        } => Err(SummaryError::Server { status, detail }),
        _ if success => Err(SummaryError::EmptyResponse),
        _ => Err(SummaryError::Server {
            status,
            detail: "no detail provided".into(),
        }),
    }
}

// ---------------------------------------------------------------------------
// HttpSummarizer
// ---------------------------------------------------------------------------

/// Uploads recordings to the summarization service over HTTP.
pub struct HttpSummarizer {
    client: reqwest::Client,
    config: SummaryConfig,
}

impl HttpSummarizer {
    /// Build an `HttpSummarizer` from application config.
    ///
    /// The HTTP client carries the per-request timeout from
    /// `config.timeout_secs`.  A default client is used if the builder fails.
    pub fn from_config(config: &SummaryConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    /// Full upload URL.
    pub fn endpoint(&self) -> String {
        format!("{}/upload-audio/", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(&self, wav: &WavBytes) -> Result<MeetingSummary, SummaryError> {
        let part = reqwest::multipart::Part::bytes(wav.as_bytes().to_vec())
            .file_name(self.config.upload_file_name.clone())
            .mime_str(WAV_CONTENT_TYPE)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = self.endpoint();
        log::info!("summary: uploading {} bytes to {url}", wav.len());

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        let result = parse_response(status, &body);
        match &result {
            Ok(s) => log::info!(
                "summary: received {} chars, {} action items",
                s.summary.len(),
                s.action_items.len()
            ),
            Err(e) => log::warn!("summary: upload failed: {e}"),
        }
        result
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
