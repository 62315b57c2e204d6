//! Command-line entry point — meeting-audio.
//!
//! ```text
//! meeting-audio <input.f32> <sample_rate> <channels> [output.wav]
//! ```
//!
//! `input.f32` is raw little-endian `f32`, interleaved, as produced by an
//! upstream decoder.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Parse arguments and read the raw sample file.
//! 4. Build [`DecodedAudio`] from the interleaved stream.
//! 5. Create a current-thread [`tokio`] runtime.
//! 6. Run the [`RecordingPipeline`] (encode → write → optional upload).
//! 7. Print the summary report when one was produced.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use meeting_audio::{
    audio::DecodedAudio,
    config::{AppConfig, AppPaths},
    pipeline::RecordingPipeline,
    summary::{HttpSummarizer, Summarizer},
};

const USAGE: &str = "usage: meeting-audio <input.f32> <sample_rate> <channels> [output.wav]";

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

struct Args {
    input: PathBuf,
    sample_rate: u32,
    channels: u16,
    output: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let (Some(input), Some(rate), Some(channels)) = (args.next(), args.next(), args.next())
    else {
        bail!(USAGE);
    };
    let output = args.next().map(PathBuf::from);
    if args.next().is_some() {
        bail!(USAGE);
    }

    Ok(Args {
        input: PathBuf::from(input),
        sample_rate: rate
            .parse()
            .with_context(|| format!("invalid sample rate {rate:?}"))?,
        channels: channels
            .parse()
            .with_context(|| format!("invalid channel count {channels:?}"))?,
        output,
    })
}

/// Decode raw little-endian `f32` samples.
fn read_f32_le(bytes: &[u8]) -> Result<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        bail!("input length {} is not a multiple of 4 bytes", bytes.len());
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Arguments + input
    let args = parse_args(std::env::args().skip(1))?;
    let raw = std::fs::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let samples = read_f32_le(&raw)?;

    // 4. Decoded audio
    let audio = DecodedAudio::from_interleaved(args.sample_rate, args.channels, &samples)?;
    log::info!(
        "Loaded {} frames x {} ch @ {} Hz ({:.1}s)",
        audio.frame_count(),
        audio.channel_count(),
        audio.sample_rate(),
        audio.duration_secs()
    );

    let output = args
        .output
        .unwrap_or_else(|| config.output.resolve_path(&AppPaths::new()));

    // 5. Tokio runtime
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    // 6. Pipeline
    let summarizer: Option<Arc<dyn Summarizer>> = if config.summary.enabled {
        Some(Arc::new(HttpSummarizer::from_config(&config.summary)))
    } else {
        None
    };
    let pipeline = RecordingPipeline::new(summarizer);
    let outcome = rt.block_on(pipeline.process(audio, &output))?;

    log::info!(
        "Wrote {} ({} bytes)",
        outcome.path.display(),
        outcome.wav.len()
    );

    // 7. Report
    match outcome.summary {
        Some(Ok(summary)) => print!("{}", summary.render()),
        Some(Err(e)) => log::error!("Error: {e}"),
        None => {}
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_required_args() {
        let a = parse_args(args(&["in.f32", "48000", "2"])).unwrap();
        assert_eq!(a.input, PathBuf::from("in.f32"));
        assert_eq!(a.sample_rate, 48_000);
        assert_eq!(a.channels, 2);
        assert!(a.output.is_none());
    }

    #[test]
    fn parses_output_path() {
        let a = parse_args(args(&["in.f32", "8000", "1", "out.wav"])).unwrap();
        assert_eq!(a.output, Some(PathBuf::from("out.wav")));
    }

    #[test]
    fn missing_args_show_usage() {
        let err = parse_args(args(&["in.f32"])).err().unwrap();
        assert!(err.to_string().contains("usage"), "{err}");
    }

    #[test]
    fn extra_args_rejected() {
        assert!(parse_args(args(&["a", "1", "1", "b", "c"])).is_err());
    }

    #[test]
    fn bad_numbers_rejected() {
        assert!(parse_args(args(&["in.f32", "fast", "2"])).is_err());
        assert!(parse_args(args(&["in.f32", "8000", "-1"])).is_err());
    }

    #[test]
    fn reads_little_endian_floats() {
        let mut bytes = Vec::new();
        for s in [0.5_f32, -1.0] {
            bytes.extend_from_slice(&s.to_le_bytes());
        }
        assert_eq!(read_f32_le(&bytes).unwrap(), vec![0.5, -1.0]);
        assert!(read_f32_le(&bytes[..5]).is_err());
    }
}
