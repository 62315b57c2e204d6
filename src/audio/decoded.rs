//! Fully decoded, planar (one `Vec` per channel) `f32` audio.
//!
//! [`DecodedAudio`] is the input boundary of the encoder.  The invariants are
//! checked once, at construction, so every later stage can rely on them:
//!
//! * at least one channel,
//! * every channel holds the same number of frames,
//! * `sample_rate > 0`,
//! * the WAV `ByteRate` and `BlockAlign` fields derived from the rate and
//!   channel count fit their 32- and 16-bit slots.
//!
//! Sample values are *not* range-checked; anything outside `[-1.0, 1.0]` is
//! clamped later by [`crate::audio::quantize`].
//!
//! # Example
//!
//! ```rust
//! use meeting_audio::audio::DecodedAudio;
//!
//! let audio = DecodedAudio::new(48_000, vec![vec![0.1, 0.2], vec![-0.1, -0.2]]).unwrap();
//! assert_eq!(audio.channel_count(), 2);
//! assert_eq!(audio.frame_count(), 2);
//! ```

use crate::wav::WavError;

use super::interleave::deinterleave;

/// BlockAlign (`channels * 2`) is a 16-bit header field.
const MAX_CHANNELS: usize = (u16::MAX / 2) as usize;

// ---------------------------------------------------------------------------
// DecodedAudio
// ---------------------------------------------------------------------------

/// Planar multi-channel audio, as produced by an upstream decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl DecodedAudio {
    /// Build from one sample vector per channel.
    ///
    /// # Errors
    ///
    /// * [`WavError::InvalidChannelLayout`] — no channels, more than
    ///   `32767` channels, or channels of unequal length.
    /// * [`WavError::InvalidParameter`] — `sample_rate == 0`, or a sample
    ///   rate and channel count whose WAV byte rate does not fit in `u32`.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> Result<Self, WavError> {
        if sample_rate == 0 {
            return Err(WavError::InvalidParameter(
                "sample rate must be greater than 0".into(),
            ));
        }

        let first_len = match channels.first() {
            Some(ch) => ch.len(),
            None => {
                return Err(WavError::InvalidChannelLayout(
                    "at least one channel is required".into(),
                ))
            }
        };

        if channels.len() > MAX_CHANNELS {
            return Err(WavError::InvalidChannelLayout(format!(
                "{} channels exceeds the WAV limit of {MAX_CHANNELS}",
                channels.len()
            )));
        }

        // ByteRate (`rate * channels * 2`) must fit the header's u32 field.
        let byte_rate = u64::from(sample_rate) * channels.len() as u64 * 2;
        if byte_rate > u64::from(u32::MAX) {
            return Err(WavError::InvalidParameter(format!(
                "{sample_rate} Hz x {} channels gives a byte rate that overflows 32 bits",
                channels.len()
            )));
        }

        if let Some((idx, ch)) = channels
            .iter()
            .enumerate()
            .find(|(_, ch)| ch.len() != first_len)
        {
            return Err(WavError::InvalidChannelLayout(format!(
                "channel {idx} has {} frames, channel 0 has {first_len}",
                ch.len()
            )));
        }

        Ok(Self {
            sample_rate,
            channels,
        })
    }

    /// Build from an interleaved stream (`L R L R …`) with `channel_count`
    /// channels.
    ///
    /// # Errors
    ///
    /// Same as [`DecodedAudio::new`]; additionally a stream whose length is
    /// not a multiple of `channel_count` is an
    /// [`WavError::InvalidChannelLayout`].
    pub fn from_interleaved(
        sample_rate: u32,
        channel_count: u16,
        samples: &[f32],
    ) -> Result<Self, WavError> {
        let channels = deinterleave(samples, channel_count)?;
        Self::new(sample_rate, channels)
    }

    /// Sample rate in Hz (always `> 0`).
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels (always `>= 1`).
    pub fn channel_count(&self) -> u16 {
        // Bounded by the check in `new`.
        self.channels.len() as u16
    }

    /// Number of frames, i.e. the length of every channel.
    pub fn frame_count(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Samples of channel `index`, or `None` when out of range.
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// All channels in order.
    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f32 {
        self.frame_count() as f32 / self.sample_rate as f32
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
