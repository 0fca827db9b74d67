//! Float to 16-bit quantization.

use crysynth_spec::OverflowPolicy;

use crate::error::{AudioError, AudioResult};

/// Quantized samples plus how many were saturated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedPcm {
    /// 16-bit samples.
    pub samples: Vec<i16>,
    /// Samples that fell outside the 16-bit range and were clamped.
    pub clipped: usize,
}

/// Scales each sample by `multiplier / 2`, rounds, and fits it into `i16`.
///
/// Under [`OverflowPolicy::Clamp`] out-of-range values saturate and are
/// counted. Under [`OverflowPolicy::Error`] the first one fails the call.
pub fn quantize(
    signal: &[f64],
    multiplier: f64,
    policy: OverflowPolicy,
) -> AudioResult<QuantizedPcm> {
    let gain = multiplier / 2.0;
    let lo = i16::MIN as f64;
    let hi = i16::MAX as f64;

    let mut samples = Vec::with_capacity(signal.len());
    let mut clipped = 0;

    for (index, &sample) in signal.iter().enumerate() {
        let value = (sample * gain).round();
        if value < lo || value > hi {
            match policy {
                OverflowPolicy::Clamp => clipped += 1,
                OverflowPolicy::Error => {
                    return Err(AudioError::QuantizationOverflow { index, value });
                }
            }
        }
        samples.push(value.clamp(lo, hi) as i16);
    }

    Ok(QuantizedPcm { samples, clipped })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_and_round() {
        let pcm = quantize(&[0.0, 1.0, -1.0, 0.00025, -0.00025], 8000.0, OverflowPolicy::Clamp)
            .unwrap();
        // gain is multiplier / 2
        assert_eq!(pcm.samples, vec![0, 4000, -4000, 1, -1]);
        assert_eq!(pcm.clipped, 0);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        let pcm = quantize(&[0.5, -0.5, 1.25], 2.0, OverflowPolicy::Clamp).unwrap();
        assert_eq!(pcm.samples, vec![1, -1, 1]);
    }

    #[test]
    fn test_clamp_saturates_and_counts() {
        let pcm = quantize(&[10.0, -10.0, 0.1], 8000.0, OverflowPolicy::Clamp).unwrap();
        assert_eq!(pcm.samples, vec![i16::MAX, i16::MIN, 400]);
        assert_eq!(pcm.clipped, 2);
    }

    #[test]
    fn test_full_scale_edges_are_not_clipped() {
        let pcm = quantize(&[32767.0, -32768.0], 2.0, OverflowPolicy::Error).unwrap();
        assert_eq!(pcm.samples, vec![i16::MAX, i16::MIN]);
        assert_eq!(pcm.clipped, 0);
    }

    #[test]
    fn test_error_policy_reports_first_overflow() {
        let err = quantize(&[0.0, 0.1, 9.0, 10.0], 8000.0, OverflowPolicy::Error).unwrap_err();
        match err {
            AudioError::QuantizationOverflow { index, value } => {
                assert_eq!(index, 2);
                assert_eq!(value, 36000.0);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_signal() {
        let pcm = quantize(&[], 8000.0, OverflowPolicy::Error).unwrap();
        assert!(pcm.samples.is_empty());
    }
}
