//! Signal composer.
//!
//! A cry is a fundamental plus five formants at `2..=6` times F0, each
//! formant nudged by an integer jitter and weighted by `(5 - k) / decay`.
//! White noise and a band near F0/2 are optional. The composer sums the
//! components, quantizes to 16 bits, and writes a mono WAV file.
//!
//! Random draws happen in a fixed order so that one seed always gives one
//! file: five formant jitters, then the noise samples, then the sub-harmonic
//! jitter.

mod output;
mod quantize;


use crysynth_spec::request::{FUNDAMENTAL_AMPLITUDE, NOISE_AMPLITUDE};
use crysynth_spec::{validate_request, SynthesisRequest, FORMANT_COUNT};
use rand_pcg::Pcg32;
use tracing::{debug, warn};

use crate::error::{AudioError, AudioResult};
use crate::rng::jitter;
use crate::synthesis::{SineWave, Synthesizer, WhiteNoise};

pub use output::{render, synthesize_to_file, Rendered};
pub use quantize::{quantize, QuantizedPcm};

/// The summed signal and the frequencies that went into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    /// Summed floating-point signal, `total_samples` long.
    pub signal: Vec<f64>,
    /// Realized formant frequencies (Hz).
    pub formants: [f64; FORMANT_COUNT],
    /// Realized sub-harmonic frequency (Hz), if enabled.
    pub sub_harmonic_hz: Option<f64>,
}

/// Draws the five formant frequencies, `fundamental * (k + 2) + jitter`.
///
/// Consumes exactly five jitter draws, in formant order.
pub fn formant_frequencies(
    fundamental_hz: f64,
    jitter_range_hz: u32,
    rng: &mut Pcg32,
) -> [f64; FORMANT_COUNT] {
    let mut formants = [0.0; FORMANT_COUNT];
    for (k, formant) in formants.iter_mut().enumerate() {
        *formant = fundamental_hz * (k + 2) as f64 + jitter(rng, jitter_range_hz) as f64;
    }
    formants
}

/// Adds `component` into `signal` sample by sample.
///
/// Refuses buffers of different lengths.
pub fn mix_into(signal: &mut [f64], component: &[f64]) -> AudioResult<()> {
    if signal.len() != component.len() {
        return Err(AudioError::LengthMismatch {
            expected: signal.len(),
            found: component.len(),
        });
    }
    for (out, sample) in signal.iter_mut().zip(component) {
        *out += sample;
    }
    Ok(())
}

/// Builds the floating-point signal for `request`.
///
/// The request is validated first; an invalid request draws nothing from
/// `rng`.
pub fn compose(request: &SynthesisRequest, rng: &mut Pcg32) -> AudioResult<Composition> {
    let warnings = validate_request(request).into_result()?;
    for warning in &warnings {
        warn!(output_id = %request.output_id, "{}", warning);
    }

    let num_samples = request.total_samples();
    let sample_rate = request.sample_rate;
    let formants = formant_frequencies(request.fundamental_hz, request.jitter_range_hz, rng);

    let mut signal = SineWave::new(request.fundamental_hz, FUNDAMENTAL_AMPLITUDE).synthesize(
        num_samples,
        sample_rate,
        rng,
    )?;

    for (k, &frequency) in formants.iter().enumerate() {
        let amplitude = request.formant_amplitude(k);
        debug!(formant = k + 1, frequency, amplitude, "adding formant");
        let component = SineWave::new(frequency, amplitude).synthesize(num_samples, sample_rate, rng)?;
        mix_into(&mut signal, &component)?;
    }

    if request.noise {
        debug!(amplitude = NOISE_AMPLITUDE, "adding white noise");
        let noise = WhiteNoise::new(NOISE_AMPLITUDE).synthesize(num_samples, sample_rate, rng)?;
        mix_into(&mut signal, &noise)?;
    }

    let sub_harmonic_hz = if request.sub_harmonic {
        let frequency = request.fundamental_hz / 2.0 + jitter(rng, request.jitter_range_hz) as f64;
        let amplitude = request.sub_harmonic_amplitude();
        debug!(frequency, amplitude, "adding sub-harmonic band");
        let band = SineWave::new(frequency, amplitude).synthesize(num_samples, sample_rate, rng)?;
        mix_into(&mut signal, &band)?;
        Some(frequency)
    } else {
        None
    };

    Ok(Composition {
        signal,
        formants,
        sub_harmonic_hz,
    })
}
