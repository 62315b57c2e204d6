//! [`encode`] — decoded audio → complete in-memory WAV file.
//!
//! ```text
//! DecodedAudio → interleave → quantize → build_header → header ++ PCM (LE)
//! ```
//!
//! The function is pure: no I/O, no shared state.  Persisting the result is a
//! separate, explicit step ([`WavBytes::write_to`]).

use std::path::Path;

use crate::audio::{count_clamped, interleave, quantize, DecodedAudio};

use super::header::{WavHeader, HEADER_LEN, MAX_PAYLOAD_BYTES};
use super::WavError;

/// MIME type of the encoded buffer.
pub const WAV_CONTENT_TYPE: &str = "audio/wav";

// ---------------------------------------------------------------------------
// WavBytes
// ---------------------------------------------------------------------------

/// A complete, self-contained WAV file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavBytes {
    header: WavHeader,
    bytes: Vec<u8>,
}

impl WavBytes {
    /// The raw file contents (header followed by payload).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take ownership of the raw file contents.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Header fields the buffer was written with.
    pub fn header(&self) -> &WavHeader {
        &self.header
    }

    /// The PCM payload without the header.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }

    /// Total length in bytes (`44 + payload`).
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: even a zero-frame file carries a header.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Always [`WAV_CONTENT_TYPE`].
    pub fn content_type(&self) -> &'static str {
        WAV_CONTENT_TYPE
    }

    /// Write the file to `path`, creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> Result<(), WavError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &self.bytes)?;
        log::info!("wav: wrote {} bytes to {}", self.bytes.len(), path.display());
        Ok(())
    }
}

impl AsRef<[u8]> for WavBytes {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

// ---------------------------------------------------------------------------
// encode
// ---------------------------------------------------------------------------

/// Encode `audio` as a 16-bit PCM WAV file.
///
/// The output is exactly `44 + frame_count * channel_count * 2` bytes and
/// identical for identical input.
///
/// # Errors
///
/// * [`WavError::PayloadTooLarge`] — the PCM data would not fit a 32-bit
///   RIFF size.
/// * Any header error from [`WavHeader::new`]; [`DecodedAudio`]'s
///   constructors already rule these out.
///
/// # Example
///
/// ```rust
/// use meeting_audio::audio::DecodedAudio;
/// use meeting_audio::wav::encode;
///
/// let audio = DecodedAudio::new(8_000, vec![vec![0.0, 1.0, -1.0, 0.5, -0.5]]).unwrap();
/// let wav = encode(&audio).unwrap();
/// assert_eq!(wav.len(), 54);
/// assert_eq!(wav.header().data_bytes(), 10);
/// ```
pub fn encode(audio: &DecodedAudio) -> Result<WavBytes, WavError> {
    let sample_count = audio.frame_count() * audio.channel_count() as usize;
    let payload_len = payload_byte_length(sample_count)?;

    // Validate the header before doing any per-sample work.
    let header = WavHeader::new(audio.sample_rate(), audio.channel_count(), payload_len)?;
    let header_bytes = header.to_bytes()?;

    let interleaved = interleave(audio);
    let clamped = count_clamped(&interleaved);
    if clamped > 0 {
        log::debug!("wav: clamped {clamped} out-of-range samples");
    }
    let quantized = quantize(&interleaved);
    drop(interleaved);

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload_len as usize);
    bytes.extend_from_slice(&header_bytes);
    for s in &quantized {
        bytes.extend_from_slice(&s.to_le_bytes());
    }

    log::debug!(
        "wav: encoded {} frames x {} ch @ {} Hz ({} bytes)",
        audio.frame_count(),
        audio.channel_count(),
        audio.sample_rate(),
        bytes.len()
    );

    Ok(WavBytes { header, bytes })
}

/// `sample_count * 2`, bounded by what a RIFF size field can describe.
fn payload_byte_length(sample_count: usize) -> Result<u32, WavError> {
    let bytes = (sample_count as u64).saturating_mul(2);
    if bytes > u64::from(MAX_PAYLOAD_BYTES) {
        return Err(WavError::PayloadTooLarge {
            bytes,
            max: u64::from(MAX_PAYLOAD_BYTES),
        });
    }
    Ok(bytes as u32)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn mono(rate: u32, samples: &[f32]) -> DecodedAudio {
        DecodedAudio::new(rate, vec![samples.to_vec()]).unwrap()
    }

    fn pcm(wav: &WavBytes) -> Vec<i16> {
        wav.payload()
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect()
    }

    #[test]
    fn mono_8k_scenario() {
        let wav = encode(&mono(8_000, &[0.0, 1.0, -1.0, 0.5, -0.5])).unwrap();
        assert_eq!(wav.len(), 54);
        assert_eq!(pcm(&wav), vec![0, 32_767, -32_767, 16_383, -16_383]);

        let h = wav.header();
        assert_eq!(h.chunk_size(), 46);
        assert_eq!(h.byte_rate().unwrap(), 16_000);
        assert_eq!(h.block_align().unwrap(), 2);
        assert_eq!(h.data_bytes(), 10);
    }

    #[test]
    fn samples_are_little_endian() {
        let wav = encode(&mono(8_000, &[1.0])).unwrap();
        // 32767 = 0x7FFF → FF 7F
        assert_eq!(wav.payload(), &[0xFF, 0x7F]);
    }

    #[test]
    fn zero_frames_gives_bare_header() {
        let wav = encode(&mono(8_000, &[])).unwrap();
        assert_eq!(wav.len(), 44);
        assert_eq!(wav.header().data_bytes(), 0);
        assert_eq!(wav.header().chunk_size(), 36);
        assert!(wav.payload().is_empty());
    }

    #[test]
    fn stereo_payload_is_interleaved() {
        let audio = DecodedAudio::new(16_000, vec![vec![1.0, 0.5], vec![-1.0, -0.5]]).unwrap();
        let wav = encode(&audio).unwrap();
        assert_eq!(wav.len(), 44 + 2 * 2 * 2);
        assert_eq!(pcm(&wav), vec![32_767, -32_767, 16_383, -16_383]);
    }

    #[test]
    fn header_bytes_match_builder() {
        let wav = encode(&mono(22_050, &[0.25; 7])).unwrap();
        let expected = super::super::build_header(22_050, 1, 14).unwrap();
        assert_eq!(&wav.as_bytes()[..HEADER_LEN], &expected);
    }

    #[test]
    fn deterministic() {
        let audio = DecodedAudio::new(
            44_100,
            vec![(0..100).map(|i| (i as f32 * 0.1).sin()).collect(); 2],
        )
        .unwrap();
        assert_eq!(encode(&audio).unwrap(), encode(&audio).unwrap());
    }

    #[test]
    fn out_of_range_input_is_clamped_not_rejected() {
        let wav = encode(&mono(8_000, &[2.0, -2.0])).unwrap();
        assert_eq!(pcm(&wav), vec![32_767, -32_767]);
    }

    #[test]
    fn content_type_is_audio_wav() {
        let wav = encode(&mono(8_000, &[])).unwrap();
        assert_eq!(wav.content_type(), "audio/wav");
    }

    #[test]
    fn payload_length_limit() {
        assert!(payload_byte_length(10).is_ok());
        let err = payload_byte_length(usize::MAX).unwrap_err();
        assert!(matches!(err, WavError::PayloadTooLarge { .. }), "{err}");
    }

    #[test]
    fn write_to_creates_parent_dirs() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("meeting_audio.wav");

        let wav = encode(&mono(8_000, &[0.0, 0.5])).unwrap();
        wav.write_to(&path).expect("write");

        let on_disk = std::fs::read(&path).expect("read back");
        assert_eq!(on_disk, wav.as_bytes());
    }
}
