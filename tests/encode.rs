//! End-to-end checks of the public encoding API.

use meeting_audio::audio::{interleave, quantize, DecodedAudio};
use meeting_audio::wav::{build_header, encode, WavError, WavHeader, HEADER_LEN};

fn u32_at(b: &[u8], off: usize) -> u32 {
    u32::from_le_bytes(b[off..off + 4].try_into().unwrap())
}

fn u16_at(b: &[u8], off: usize) -> u16 {
    u16::from_le_bytes(b[off..off + 2].try_into().unwrap())
}

#[test]
fn mono_8k_scenario_bytes() {
    let audio = DecodedAudio::new(8_000, vec![vec![0.0, 1.0, -1.0, 0.5, -0.5]]).unwrap();
    let wav = encode(&audio).unwrap();
    let b = wav.as_bytes();

    assert_eq!(b.len(), 54);
    assert_eq!(u32_at(b, 4), 46);
    assert_eq!(u32_at(b, 28), 16_000);
    assert_eq!(u16_at(b, 32), 2);
    assert_eq!(u32_at(b, 40), 10);

    let codes: Vec<i16> = b[HEADER_LEN..]
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]))
        .collect();
    assert_eq!(codes, vec![0, 32_767, -32_767, 16_383, -16_383]);
}

#[test]
fn length_invariant_across_layouts() {
    for (channels, frames) in [(1usize, 0usize), (1, 1), (2, 3), (6, 100), (8, 17)] {
        let audio = DecodedAudio::new(44_100, vec![vec![0.1; frames]; channels]).unwrap();
        let wav = encode(&audio).unwrap();
        assert_eq!(
            wav.len(),
            44 + frames * channels * 2,
            "{channels} ch x {frames} frames"
        );
    }
}

#[test]
fn header_round_trip() {
    let audio = DecodedAudio::new(48_000, vec![vec![0.0; 250]; 3]).unwrap();
    let wav = encode(&audio).unwrap();

    let h = WavHeader::parse(wav.as_bytes()).unwrap();
    assert_eq!(h.sample_rate(), 48_000);
    assert_eq!(h.channel_count(), 3);
    assert_eq!(h.data_bytes() / (u32::from(h.channel_count()) * 2), 250);
    assert_eq!(&h, wav.header());
}

#[test]
fn zero_frames_mono() {
    let audio = DecodedAudio::new(16_000, vec![Vec::new()]).unwrap();
    let wav = encode(&audio).unwrap();
    let b = wav.as_bytes();
    assert_eq!(b.len(), 44);
    assert_eq!(u32_at(b, 4), 36);
    assert_eq!(u32_at(b, 40), 0);
}

#[test]
fn stereo_interleave_before_quantize() {
    let audio = DecodedAudio::new(8_000, vec![vec![0.1, 0.2], vec![-0.1, -0.2]]).unwrap();
    let interleaved = interleave(&audio);
    assert_eq!(interleaved, vec![0.1, -0.1, 0.2, -0.2]);

    let wav = encode(&audio).unwrap();
    let expected: Vec<u8> = quantize(&interleaved)
        .iter()
        .flat_map(|s| s.to_le_bytes())
        .collect();
    assert_eq!(wav.payload(), expected.as_slice());
}

#[test]
fn encoding_is_deterministic() {
    let left: Vec<f32> = (0..512).map(|i| ((i as f32) * 0.013).sin() * 1.3).collect();
    let right: Vec<f32> = left.iter().map(|s| -s).collect();
    let audio = DecodedAudio::new(22_050, vec![left, right]).unwrap();

    let a = encode(&audio).unwrap().into_bytes();
    let b = encode(&audio).unwrap().into_bytes();
    assert_eq!(a, b);
}

#[test]
fn invalid_layouts_fail_before_encoding() {
    assert!(matches!(
        DecodedAudio::new(8_000, vec![vec![0.0; 2], vec![0.0; 3]]),
        Err(WavError::InvalidChannelLayout(_))
    ));
    assert!(matches!(
        DecodedAudio::new(8_000, Vec::new()),
        Err(WavError::InvalidChannelLayout(_))
    ));
    assert!(matches!(
        build_header(0, 1, 0),
        Err(WavError::InvalidParameter(_))
    ));
}

#[test]
fn header_builder_matches_encoder_header() {
    let audio = DecodedAudio::new(11_025, vec![vec![0.5; 9]; 2]).unwrap();
    let wav = encode(&audio).unwrap();
    assert_eq!(
        &wav.as_bytes()[..HEADER_LEN],
        &build_header(11_025, 2, 36).unwrap()
    );
}

#[test]
fn samples_just_below_a_code_truncate_down() {
    // Each exact product x * 32767 lies just under an integer k.
    let below = |k: i32| {
        let mut x = (f64::from(k) / 32_767.0) as f32;
        while f64::from(x) * 32_767.0 >= f64::from(k) {
            x = f32::from_bits(x.to_bits() - 1);
        }
        x
    };
    let ks = [1, 2, 5, 1_024, 20_000, 32_767];
    let samples: Vec<f32> = ks.iter().map(|&k| below(k)).collect();

    let audio = DecodedAudio::new(8_000, vec![samples]).unwrap();
    let wav = encode(&audio).unwrap();
    let codes: Vec<i16> = wav
        .payload()
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]))
        .collect();

    let expected: Vec<i16> = ks.iter().map(|&k| (k - 1) as i16).collect();
    assert_eq!(codes, expected);
    assert_eq!(quantize(&[3.051851e-5]), vec![0]);
}
