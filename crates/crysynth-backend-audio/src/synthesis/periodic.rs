//! Periodic waveform generator.
//!
//! One cycle of a sine wave is computed into a table of
//! `floor(sample_rate / frequency)` samples, and the output is that table
//! repeated. Work is O(period) for the table plus O(n) copying.
//!
//! When the frequency does not divide the sample rate the table holds a
//! slightly truncated cycle, so each tile boundary carries a small phase
//! jump. That approximation is part of the sound.

use std::f64::consts::TAU;

use rand_pcg::Pcg32;

use crate::error::{AudioError, AudioResult};

use super::Synthesizer;

/// Number of samples in one table period, never less than 1.
///
/// Frequencies above the sample rate give a single-sample period.
pub fn sine_period(frequency: f64, sample_rate: u32) -> usize {
    ((sample_rate as f64 / frequency).floor() as usize).max(1)
}

/// Builds one period of `amplitude * sin(2π f t)`.
pub fn sine_table(frequency: f64, amplitude: f64, sample_rate: u32) -> AudioResult<Vec<f64>> {
    check_params(frequency, sample_rate)?;
    Ok(table(frequency, amplitude, sample_rate, sine_period(frequency, sample_rate)))
}

/// Generates `total_samples` of a sine wave by tiling one period.
///
/// Only the part of the period that fits in the output is tabulated, so a
/// sub-hertz frequency costs no more than `total_samples` evaluations.
pub fn sinewave(
    frequency: f64,
    amplitude: f64,
    sample_rate: u32,
    total_samples: usize,
) -> AudioResult<Vec<f64>> {
    check_params(frequency, sample_rate)?;
    let len = sine_period(frequency, sample_rate).min(total_samples);
    let table = table(frequency, amplitude, sample_rate, len);
    Ok(table.iter().copied().cycle().take(total_samples).collect())
}

fn check_params(frequency: f64, sample_rate: u32) -> AudioResult<()> {
    if !(frequency.is_finite() && frequency > 0.0) {
        return Err(AudioError::InvalidFrequency { freq: frequency });
    }
    if sample_rate == 0 {
        return Err(AudioError::InvalidSampleRate { rate: sample_rate });
    }
    Ok(())
}

fn table(frequency: f64, amplitude: f64, sample_rate: u32, len: usize) -> Vec<f64> {
    let sr = sample_rate as f64;
    (0..len)
        .map(|i| amplitude * (TAU * frequency * (i as f64 / sr)).sin())
        .collect()
}

/// A fixed-frequency sine component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineWave {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
}

impl SineWave {
    /// Creates a sine component.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

impl Synthesizer for SineWave {
    fn synthesize(
        &self,
        num_samples: usize,
        sample_rate: u32,
        _rng: &mut Pcg32,
    ) -> AudioResult<Vec<f64>> {
        sinewave(self.frequency, self.amplitude, sample_rate, num_samples)
    }
}
