//! Signal components.
//!
//! - `periodic` - Table-based sine waves tiled to length
//! - `noise` - Uniform white noise

pub mod noise;
pub mod periodic;

use rand_pcg::Pcg32;

use crate::error::AudioResult;

pub use noise::{white_noise, WhiteNoise};
pub use periodic::{sine_period, sine_table, sinewave, SineWave};

/// Common trait for every signal component.
pub trait Synthesizer {
    /// Generates audio samples.
    ///
    /// # Arguments
    /// * `num_samples` - Number of samples to generate
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `rng` - Deterministic RNG for any randomness
    fn synthesize(
        &self,
        num_samples: usize,
        sample_rate: u32,
        rng: &mut Pcg32,
    ) -> AudioResult<Vec<f64>>;
}
