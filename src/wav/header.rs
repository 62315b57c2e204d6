//! Canonical 44-byte RIFF/WAVE header for 16-bit PCM.
//!
//! | Offset | Size | Field         | Value                          |
//! |--------|------|---------------|--------------------------------|
//! | 0      | 4    | ChunkID       | `"RIFF"`                       |
//! | 4      | 4    | ChunkSize     | `36 + data_bytes`              |
//! | 8      | 4    | Format        | `"WAVE"`                       |
//! | 12     | 4    | Subchunk1ID   | `"fmt "`                       |
//! | 16     | 4    | Subchunk1Size | `16`                           |
//! | 20     | 2    | AudioFormat   | `1` (PCM)                      |
//! | 22     | 2    | NumChannels   | `channel_count`                |
//! | 24     | 4    | SampleRate    | `sample_rate`                  |
//! | 28     | 4    | ByteRate      | `sample_rate * channels * 2`   |
//! | 32     | 2    | BlockAlign    | `channels * 2`                 |
//! | 34     | 2    | BitsPerSample | `16`                           |
//! | 36     | 4    | Subchunk2ID   | `"data"`                       |
//! | 40     | 4    | Subchunk2Size | `data_bytes`                   |
//!
//! All integers are little-endian.

use bytes::{Buf, BufMut};

use super::WavError;

/// Size of the header in bytes.
pub const HEADER_LEN: usize = 44;

/// `ChunkSize` counts everything after its own field: the rest of the header.
const RIFF_OVERHEAD: u32 = 36;
const FMT_CHUNK_SIZE: u32 = 16;
const FORMAT_PCM: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;
const BYTES_PER_SAMPLE: u16 = BITS_PER_SAMPLE / 8;

/// Largest payload whose `ChunkSize` still fits in a `u32`.
pub const MAX_PAYLOAD_BYTES: u32 = u32::MAX - RIFF_OVERHEAD;

// ---------------------------------------------------------------------------
// WavHeader
// ---------------------------------------------------------------------------

/// Decoded view of the header fields.
///
/// Build one with [`WavHeader::new`] and serialise with
/// [`WavHeader::to_bytes`], or read one back with [`WavHeader::parse`].
/// The fields are private: every value has passed `new`'s checks, so the
/// derived sizes below cannot overflow or divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    sample_rate: u32,
    channel_count: u16,
    data_bytes: u32,
}

impl WavHeader {
    /// Validate the header parameters.
    ///
    /// # Errors
    ///
    /// * [`WavError::InvalidParameter`] — zero sample rate, odd payload
    ///   length, or a byte rate that overflows `u32`.
    /// * [`WavError::InvalidChannelLayout`] — zero channels.
    /// * [`WavError::PayloadTooLarge`] — `36 + data_bytes` overflows `u32`.
    pub fn new(sample_rate: u32, channel_count: u16, data_bytes: u32) -> Result<Self, WavError> {
        if sample_rate == 0 {
            return Err(WavError::InvalidParameter(
                "sample rate must be greater than 0".into(),
            ));
        }
        if channel_count == 0 {
            return Err(WavError::InvalidChannelLayout(
                "at least one channel is required".into(),
            ));
        }
        if data_bytes % u32::from(BYTES_PER_SAMPLE) != 0 {
            return Err(WavError::InvalidParameter(format!(
                "payload of {data_bytes} bytes is not a whole number of 16-bit samples"
            )));
        }
        if data_bytes > MAX_PAYLOAD_BYTES {
            return Err(WavError::PayloadTooLarge {
                bytes: u64::from(data_bytes),
                max: u64::from(MAX_PAYLOAD_BYTES),
            });
        }

        let header = Self {
            sample_rate,
            channel_count,
            data_bytes,
        };
        header.byte_rate()?;
        header.block_align()?;
        Ok(header)
    }

    /// Sample rate in Hz (always `> 0`).
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels (always `>= 1`).
    pub fn channel_count(&self) -> u16 {
        self.channel_count
    }

    /// `Subchunk2Size`: length of the PCM payload in bytes.
    pub fn data_bytes(&self) -> u32 {
        self.data_bytes
    }

    /// `sample_rate * channel_count * 2`.
    pub fn byte_rate(&self) -> Result<u32, WavError> {
        self.sample_rate
            .checked_mul(u32::from(self.channel_count))
            .and_then(|v| v.checked_mul(u32::from(BYTES_PER_SAMPLE)))
            .ok_or_else(|| {
                WavError::InvalidParameter(format!(
                    "byte rate for {} Hz x {} channels overflows 32 bits",
                    self.sample_rate, self.channel_count
                ))
            })
    }

    /// `channel_count * 2`: bytes per frame.
    pub fn block_align(&self) -> Result<u16, WavError> {
        self.channel_count
            .checked_mul(BYTES_PER_SAMPLE)
            .ok_or_else(|| {
                WavError::InvalidParameter(format!(
                    "block align for {} channels overflows 16 bits",
                    self.channel_count
                ))
            })
    }

    /// `ChunkSize` field: `36 + data_bytes`.
    pub fn chunk_size(&self) -> u32 {
        RIFF_OVERHEAD + self.data_bytes
    }

    /// Number of frames described by `data_bytes`.
    pub fn frame_count(&self) -> u32 {
        self.data_bytes / (u32::from(self.channel_count) * u32::from(BYTES_PER_SAMPLE))
    }

    /// Serialise to the exact 44-byte layout.
    pub fn to_bytes(&self) -> Result<[u8; HEADER_LEN], WavError> {
        let byte_rate = self.byte_rate()?;
        let block_align = self.block_align()?;

        let mut out = [0u8; HEADER_LEN];
        let mut buf = &mut out[..];

        // RIFF chunk descriptor
        buf.put_slice(b"RIFF");
        buf.put_u32_le(self.chunk_size());
        buf.put_slice(b"WAVE");

        // fmt sub-chunk
        buf.put_slice(b"fmt ");
        buf.put_u32_le(FMT_CHUNK_SIZE);
        buf.put_u16_le(FORMAT_PCM);
        buf.put_u16_le(self.channel_count);
        buf.put_u32_le(self.sample_rate);
        buf.put_u32_le(byte_rate);
        buf.put_u16_le(block_align);
        buf.put_u16_le(BITS_PER_SAMPLE);

        // data sub-chunk
        buf.put_slice(b"data");
        buf.put_u32_le(self.data_bytes);

        debug_assert!(buf.is_empty());
        Ok(out)
    }

    /// Read a canonical header from the first 44 bytes of `bytes`.
    ///
    /// Only the layout this crate writes is accepted: 16-bit PCM with `fmt `
    /// immediately followed by `data`.
    ///
    /// # Errors
    ///
    /// [`WavError::MalformedHeader`] on short input, wrong tags, non-PCM
    /// format or inconsistent derived fields.
    pub fn parse(bytes: &[u8]) -> Result<Self, WavError> {
        if bytes.len() < HEADER_LEN {
            return Err(WavError::MalformedHeader(format!(
                "need {HEADER_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        let mut buf = &bytes[..HEADER_LEN];

        expect_tag(&mut buf, b"RIFF")?;
        let chunk_size = buf.get_u32_le();
        expect_tag(&mut buf, b"WAVE")?;
        expect_tag(&mut buf, b"fmt ")?;

        let fmt_size = buf.get_u32_le();
        let format = buf.get_u16_le();
        if fmt_size != FMT_CHUNK_SIZE || format != FORMAT_PCM {
            return Err(WavError::MalformedHeader(format!(
                "expected PCM fmt chunk (size 16, format 1), got size {fmt_size}, format {format}"
            )));
        }

        let channel_count = buf.get_u16_le();
        let sample_rate = buf.get_u32_le();
        let byte_rate = buf.get_u32_le();
        let block_align = buf.get_u16_le();
        let bits = buf.get_u16_le();
        if bits != BITS_PER_SAMPLE {
            return Err(WavError::MalformedHeader(format!(
                "expected 16 bits per sample, got {bits}"
            )));
        }

        expect_tag(&mut buf, b"data")?;
        let data_bytes = buf.get_u32_le();

        let header = Self::new(sample_rate, channel_count, data_bytes)
            .map_err(|e| WavError::MalformedHeader(e.to_string()))?;

        if header.chunk_size() != chunk_size
            || header.byte_rate()? != byte_rate
            || header.block_align()? != block_align
        {
            return Err(WavError::MalformedHeader(
                "derived size fields are inconsistent".into(),
            ));
        }

        Ok(header)
    }
}

fn expect_tag(buf: &mut &[u8], tag: &[u8; 4]) -> Result<(), WavError> {
    let mut got = [0u8; 4];
    buf.copy_to_slice(&mut got);
    if &got != tag {
        return Err(WavError::MalformedHeader(format!(
            "expected {:?}, found {:?}",
            String::from_utf8_lossy(tag),
            String::from_utf8_lossy(&got)
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// build_header
// ---------------------------------------------------------------------------

/// Produce the 44-byte header for a payload of `payload_byte_length` bytes.
///
/// Zero sample rate is rejected rather than written out: a file claiming
/// 0 Hz is unplayable, which is worse than failing loudly here.
///
/// # Example
///
/// ```rust
/// use meeting_audio::wav::build_header;
///
/// let header = build_header(8_000, 1, 10).unwrap();
/// assert_eq!(&header[0..4], b"RIFF");
/// assert_eq!(u32::from_le_bytes(header[4..8].try_into().unwrap()), 46);
/// ```
pub fn build_header(
    sample_rate: u32,
    channel_count: u16,
    payload_byte_length: u32,
) -> Result<[u8; HEADER_LEN], WavError> {
    WavHeader::new(sample_rate, channel_count, payload_byte_length)?.to_bytes()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
