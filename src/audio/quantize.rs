//! Float → signed 16-bit PCM quantization.
//!
//! Per sample:
//!
//! 1. clamp to `[-1.0, 1.0]` (out-of-range input is expected, never an error),
//! 2. scale by [`PCM16_SCALE`] (`32767`) in `f64`,
//! 3. truncate toward zero.
//!
//! The product is formed in `f64`, where `x * 32767` is exact for every `f32`
//! input.  An `f32` multiply rounds products lying just below an integer up
//! to it, and truncation then yields a code one too high.
//!
//! NOTE: the scale is `0x7FFF` for *both* signs, so `-1.0` maps to `-32767`,
//! not `i16::MIN`.  Many encoders use `32768` for the negative half or round
//! to nearest; doing either here changes the byte value of nearly every
//! sample in the output file.

/// Scale factor applied after clamping.  Deliberately `i16::MAX`, not `32768`.
pub const PCM16_SCALE: f64 = 32_767.0;

/// Quantize a single sample.  `NaN` maps to `0`.
///
/// # Example
///
/// ```rust
/// use meeting_audio::audio::quantize_sample;
///
/// assert_eq!(quantize_sample(1.0), 32_767);
/// assert_eq!(quantize_sample(-1.0), -32_767);
/// assert_eq!(quantize_sample(0.5), 16_383); // 16383.5 truncated
/// ```
#[inline]
pub fn quantize_sample(x: f32) -> i16 {
    // `as` truncates toward zero and maps NaN to 0; the clamp keeps the
    // product inside i16 range.
    (f64::from(x).clamp(-1.0, 1.0) * PCM16_SCALE) as i16
}

/// Quantize every sample in order.  Output length equals input length.
pub fn quantize(samples: &[f32]) -> Vec<i16> {
    samples.iter().copied().map(quantize_sample).collect()
}

/// Number of samples that [`quantize`] will clamp (outside `[-1.0, 1.0]`).
pub fn count_clamped(samples: &[f32]) -> usize {
    samples.iter().filter(|s| s.abs() > 1.0).count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scale_codes() {
        assert_eq!(quantize_sample(1.0), 32_767);
        assert_eq!(quantize_sample(-1.0), -32_767);
        assert_eq!(quantize_sample(0.0), 0);
    }

    #[test]
    fn halves_truncate_toward_zero() {
        assert_eq!(quantize_sample(0.5), 16_383);
        assert_eq!(quantize_sample(-0.5), -16_383);
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(quantize_sample(2.0), quantize_sample(1.0));
        assert_eq!(quantize_sample(-7.25), quantize_sample(-1.0));
        assert_eq!(quantize_sample(f32::INFINITY), 32_767);
        assert_eq!(quantize_sample(f32::NEG_INFINITY), -32_767);
    }

    #[test]
    fn never_produces_i16_min() {
        let codes = quantize(&[-1.0, -1.0001, -100.0, f32::MIN]);
        assert!(codes.iter().all(|&c| c == -32_767));
    }

    #[test]
    fn nan_maps_to_zero() {
        assert_eq!(quantize_sample(f32::NAN), 0);
    }

    #[test]
    fn small_values_truncate_to_zero() {
        // 1e-5 * 32767 ≈ 0.33
        assert_eq!(quantize_sample(1e-5), 0);
        assert_eq!(quantize_sample(-1e-5), 0);
    }

    #[test]
    fn product_just_below_one_truncates_to_zero() {
        // 3.051851e-5 * 32767 = 0.99999...; an f32 multiply rounds it to 1.0.
        assert_eq!(quantize_sample(3.051851e-5), 0);
        assert_eq!(quantize_sample(-3.051851e-5), 0);
    }

    /// The largest `f32` strictly below `k / 32767` must quantize to `k - 1`.
    #[test]
    fn values_just_below_code_boundaries() {
        for k in [1_i32, 2, 3, 7, 100, 1_000, 12_345, 16_384, 30_000, 32_766, 32_767] {
            let boundary = (f64::from(k) / PCM16_SCALE) as f32;
            // Step down until the exact product is below k.
            let mut x = boundary;
            while f64::from(x) * PCM16_SCALE >= f64::from(k) {
                x = f32::from_bits(x.to_bits() - 1);
            }
            let expected = (k - 1) as i16;
            assert_eq!(quantize_sample(x), expected, "k = {k}, x = {x:e}");
            assert_eq!(quantize_sample(-x), -expected, "k = {k}, x = {:e}", -x);
        }
    }

    #[test]
    fn preserves_length_and_order() {
        let codes = quantize(&[0.0, 1.0, -1.0, 0.5, -0.5]);
        assert_eq!(codes, vec![0, 32_767, -32_767, 16_383, -16_383]);
    }

    #[test]
    fn empty_input() {
        assert!(quantize(&[]).is_empty());
    }

    #[test]
    fn counts_clamped_samples() {
        assert_eq!(count_clamped(&[0.0, 1.0, -1.0, 1.5, -2.0]), 2);
    }
}
