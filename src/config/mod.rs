//! Configuration module for meeting-audio.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for output and the
//! summarization upload, `AppPaths` for cross-platform directories, and TOML
//! persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, OutputConfig, SummaryConfig};
