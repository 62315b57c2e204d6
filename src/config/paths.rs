//! Platform directories for meeting-audio, resolved through `dirs`.
//!
//! * `settings.toml` lives in the per-user config dir
//!   (`~/.config/meeting-audio/` on Linux, `%APPDATA%\meeting-audio\` on
//!   Windows).
//! * Encoded meeting recordings land in `recordings/` under the local data dir
//!   (`~/.local/share/meeting-audio/recordings/` on Linux) unless
//!   [`OutputConfig::output_dir`](super::OutputConfig) or an explicit CLI
//!   output path says otherwise.

use std::path::PathBuf;

const APP_NAME: &str = "meeting-audio";

/// Where settings are read from and where WAV files are written by default.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    /// `config_dir/settings.toml`.
    pub settings_file: PathBuf,
    /// Default home for `meeting_audio.wav` and other encoded recordings
    /// before they are uploaded for summarization.
    pub recordings_dir: PathBuf,
}

impl AppPaths {
    /// Resolve against the platform directories, or `./meeting-audio/` when
    /// the platform reports none.
    pub fn new() -> Self {
        let base = |dir: Option<PathBuf>| dir.unwrap_or_else(|| PathBuf::from(".")).join(APP_NAME);

        let config_dir = base(dirs::config_dir());
        let recordings_dir = base(dirs::data_local_dir()).join("recordings");

        Self {
            settings_file: config_dir.join("settings.toml"),
            config_dir,
            recordings_dir,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
