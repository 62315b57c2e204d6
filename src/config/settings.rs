//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files.  Missing keys fall back
//! to their defaults, so a partial `settings.toml` is valid.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// SummaryConfig
// ---------------------------------------------------------------------------

/// Settings for uploading recordings to the summarization service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Upload the encoded file after writing it.
    pub enabled: bool,
    /// Base URL of the service; the upload goes to `{base_url}/upload-audio/`.
    pub base_url: String,
    /// Seconds to wait for transcription + summarization before giving up.
    pub timeout_secs: u64,
    /// File name sent in the multipart `file` field.
    pub upload_file_name: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "http://127.0.0.1:8000".into(),
            timeout_secs: 120,
            upload_file_name: "meeting_audio.wav".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// OutputConfig
// ---------------------------------------------------------------------------

/// Where encoded recordings are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name used when no explicit output path is given.
    pub file_name: String,
    /// Output directory.  `None` means [`AppPaths::recordings_dir`].
    pub output_dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: "meeting_audio.wav".into(),
            output_dir: None,
        }
    }
}

impl OutputConfig {
    /// Full default output path.
    pub fn resolve_path(&self, paths: &AppPaths) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| paths.recordings_dir.clone())
            .join(&self.file_name)
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// ```rust,no_run
/// use meeting_audio::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Summarization upload settings.
    pub summary: SummaryConfig,
    /// Output file settings.
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
