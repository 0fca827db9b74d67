//! White noise generator.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::error::AudioResult;

use super::Synthesizer;

/// Draws `num_samples` values uniformly from `[-amplitude, amplitude]`.
///
/// Each sample consumes one draw from `rng`, in order.
pub fn white_noise(amplitude: f64, num_samples: usize, rng: &mut Pcg32) -> Vec<f64> {
    (0..num_samples)
        .map(|_| amplitude * rng.gen_range(-1.0..=1.0))
        .collect()
}

/// A white noise component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhiteNoise {
    /// Peak amplitude.
    pub amplitude: f64,
}

impl WhiteNoise {
    /// Creates a white noise component.
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }
}

impl Synthesizer for WhiteNoise {
    fn synthesize(
        &self,
        num_samples: usize,
        _sample_rate: u32,
        rng: &mut Pcg32,
    ) -> AudioResult<Vec<f64>> {
        Ok(white_noise(self.amplitude, num_samples, rng))
    }
}
