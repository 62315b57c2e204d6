//! Channel (de)interleaving.
//!
//! WAV stores multi-channel PCM frame by frame: for frame `i` and channel `c`
//! the sample lives at index `i * channel_count + c`.
//!
//! 1. [`interleave`] — planar [`DecodedAudio`] → frame-major `Vec<f32>`.
//! 2. [`deinterleave`] — the inverse, for raw interleaved input streams.

use crate::wav::WavError;

use super::DecodedAudio;

// ---------------------------------------------------------------------------
// interleave
// ---------------------------------------------------------------------------

/// Reorder planar channels into a single frame-major sequence.
///
/// The output length is `frame_count * channel_count`; a zero-frame input
/// yields an empty vector.
///
/// # Example
///
/// ```rust
/// use meeting_audio::audio::{interleave, DecodedAudio};
///
/// let audio = DecodedAudio::new(8_000, vec![vec![0.1, 0.2], vec![-0.1, -0.2]]).unwrap();
/// assert_eq!(interleave(&audio), vec![0.1, -0.1, 0.2, -0.2]);
/// ```
pub fn interleave(audio: &DecodedAudio) -> Vec<f32> {
    let channels = audio.channels();

    // Mono fast path: the planar buffer already is the interleaved one.
    if let [mono] = channels {
        return mono.clone();
    }

    let frame_count = audio.frame_count();
    let mut out = Vec::with_capacity(frame_count * channels.len());

    for i in 0..frame_count {
        for ch in channels {
            out.push(ch[i]);
        }
    }

    out
}

// ---------------------------------------------------------------------------
// deinterleave
// ---------------------------------------------------------------------------

/// Split an interleaved stream into one vector per channel.
///
/// # Errors
///
/// [`WavError::InvalidChannelLayout`] when `channel_count == 0` or
/// `samples.len()` is not a multiple of `channel_count` (trailing partial
/// frame).
pub fn deinterleave(samples: &[f32], channel_count: u16) -> Result<Vec<Vec<f32>>, WavError> {
    let n = channel_count as usize;
    if n == 0 {
        return Err(WavError::InvalidChannelLayout(
            "at least one channel is required".into(),
        ));
    }
    if samples.len() % n != 0 {
        return Err(WavError::InvalidChannelLayout(format!(
            "{} samples do not divide into {n}-channel frames",
            samples.len()
        )));
    }

    let frame_count = samples.len() / n;
    let mut channels = vec![Vec::with_capacity(frame_count); n];

    for frame in samples.chunks_exact(n) {
        for (ch, &s) in channels.iter_mut().zip(frame) {
            ch.push(s);
        }
    }

    Ok(channels)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
