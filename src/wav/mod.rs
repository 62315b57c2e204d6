//! RIFF/WAVE container — 16-bit PCM header construction and file encoding.
//!
//! # Quick Start
//!
//! ```rust
//! use meeting_audio::audio::DecodedAudio;
//! use meeting_audio::wav::{encode, WavHeader};
//!
//! let audio = DecodedAudio::new(48_000, vec![vec![0.0; 480], vec![0.0; 480]]).unwrap();
//! let wav = encode(&audio).unwrap();
//!
//! let header = WavHeader::parse(wav.as_bytes()).unwrap();
//! assert_eq!(header.channel_count(), 2);
//! assert_eq!(header.frame_count(), 480);
//! ```

pub mod encoder;
pub mod error;
pub mod header;

pub use encoder::{encode, WavBytes, WAV_CONTENT_TYPE};
pub use error::WavError;
pub use header::{build_header, WavHeader, HEADER_LEN, MAX_PAYLOAD_BYTES};
