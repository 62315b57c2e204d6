//! Audio sample handling — decoded input, channel interleaving, quantization.
//!
//! # Pipeline
//!
//! ```text
//! DecodedAudio (planar f32) → interleave → quantize → i16 PCM
//! ```
//!
//! Every stage is a pure function over borrowed input; none of them allocate
//! shared state or perform I/O.

pub mod decoded;
pub mod interleave;
pub mod quantize;

pub use decoded::DecodedAudio;
pub use interleave::{deinterleave, interleave};
pub use quantize::{count_clamped, quantize, quantize_sample, PCM16_SCALE};
