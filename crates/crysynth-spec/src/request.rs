//! Synthesis request types.
//!
//! A [`SynthesisRequest`] fully specifies one output file: the pitch, the
//! rendering format, the amplitude shaping, and which noise components to
//! add. Requests are plain data; the audio backend consumes them.

use serde::{Deserialize, Serialize};

/// Sample rate used by the built-in presets (Hz).
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Output length used by the built-in presets (seconds).
pub const DEFAULT_DURATION_SECONDS: f64 = 5.0;

/// Ratio between the fundamental's amplitude and the weakest formant's.
///
/// Cry formant intensity decreases almost linearly with formant index.
pub const DEFAULT_AMPLITUDE_DECAY: f64 = 6.0;

/// Gain applied to the summed signal before 16-bit quantization.
pub const DEFAULT_AMPLITUDE_MULTIPLIER: f64 = 8000.0;

/// Maximum formant jitter in Hz, applied symmetrically.
pub const DEFAULT_JITTER_RANGE_HZ: u32 = 20;

/// Formant amplitude weights, divided by the decay factor.
///
/// Amplitude falls monotonically with formant index (spectral roll-off).
pub const FORMANT_WEIGHTS: [f64; 5] = [5.0, 4.0, 3.0, 2.0, 1.0];

/// Amplitude of the fundamental component.
pub const FUNDAMENTAL_AMPLITUDE: f64 = 1.0;

/// Amplitude of the white noise component.
pub const NOISE_AMPLITUDE: f64 = 0.3;

/// Sub-harmonic amplitude weight, divided by the decay factor.
pub const SUB_HARMONIC_WEIGHT: f64 = 3.0;

/// What to do with samples that fall outside the 16-bit range after scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Saturate to `i16::MIN..=i16::MAX` and count the clipped samples.
    #[default]
    Clamp,
    /// Fail the request at the first out-of-range sample.
    Error,
}

impl OverflowPolicy {
    /// Returns the policy name as written in preset files.
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowPolicy::Clamp => "clamp",
            OverflowPolicy::Error => "error",
        }
    }
}

impl std::fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One fully specified synthesis job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesisRequest {
    /// File stem of the output; the file is written as `<output_id>.wav`.
    pub output_id: String,
    /// Fundamental frequency (F0) in Hz.
    pub fundamental_hz: f64,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Length of the output in seconds.
    #[serde(default = "default_duration_seconds")]
    pub duration_seconds: f64,
    /// Formant amplitude decay factor; formant `k` is scaled by `(5 - k) / decay`.
    #[serde(default = "default_amplitude_decay")]
    pub amplitude_decay: f64,
    /// Gain applied before quantization (the sample is scaled by `multiplier / 2`).
    #[serde(default = "default_amplitude_multiplier")]
    pub amplitude_multiplier: f64,
    /// Symmetric integer jitter range for formant and sub-harmonic frequencies.
    #[serde(default = "default_jitter_range_hz")]
    pub jitter_range_hz: u32,
    /// Add white noise.
    #[serde(default = "default_true")]
    pub noise: bool,
    /// Add a tonal band near half of the fundamental.
    #[serde(default)]
    pub sub_harmonic: bool,
    /// Quantization overflow handling.
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

impl SynthesisRequest {
    /// Creates a request with the default rendering settings and white noise on.
    pub fn new(output_id: impl Into<String>, fundamental_hz: f64) -> Self {
        Self {
            output_id: output_id.into(),
            fundamental_hz,
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration_seconds: DEFAULT_DURATION_SECONDS,
            amplitude_decay: DEFAULT_AMPLITUDE_DECAY,
            amplitude_multiplier: DEFAULT_AMPLITUDE_MULTIPLIER,
            jitter_range_hz: DEFAULT_JITTER_RANGE_HZ,
            noise: true,
            sub_harmonic: false,
            overflow: OverflowPolicy::Clamp,
        }
    }

    /// Sets the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the duration in seconds.
    pub fn with_duration(mut self, duration_seconds: f64) -> Self {
        self.duration_seconds = duration_seconds;
        self
    }

    /// Sets the formant amplitude decay factor.
    pub fn with_amplitude_decay(mut self, amplitude_decay: f64) -> Self {
        self.amplitude_decay = amplitude_decay;
        self
    }

    /// Sets the output gain.
    pub fn with_amplitude_multiplier(mut self, amplitude_multiplier: f64) -> Self {
        self.amplitude_multiplier = amplitude_multiplier;
        self
    }

    /// Sets the jitter range in Hz.
    pub fn with_jitter_range(mut self, jitter_range_hz: u32) -> Self {
        self.jitter_range_hz = jitter_range_hz;
        self
    }

    /// Enables or disables white noise.
    pub fn with_noise(mut self, noise: bool) -> Self {
        self.noise = noise;
        self
    }

    /// Enables or disables the sub-harmonic band.
    pub fn with_sub_harmonic(mut self, sub_harmonic: bool) -> Self {
        self.sub_harmonic = sub_harmonic;
        self
    }

    /// Sets the quantization overflow policy.
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Number of samples in every component buffer.
    ///
    /// Only meaningful for a validated request.
    pub fn total_samples(&self) -> usize {
        (self.sample_rate as f64 * self.duration_seconds).round() as usize
    }

    /// Amplitude of formant `index` (0-based).
    pub fn formant_amplitude(&self, index: usize) -> f64 {
        FORMANT_WEIGHTS[index] / self.amplitude_decay
    }

    /// Amplitude of the sub-harmonic band.
    pub fn sub_harmonic_amplitude(&self) -> f64 {
        SUB_HARMONIC_WEIGHT / self.amplitude_decay
    }

    /// Upper bound on the absolute quantized sample value.
    ///
    /// Sums the amplitudes of every enabled component, then applies the
    /// output gain.
    pub fn peak_estimate(&self) -> f64 {
        let mut peak = FUNDAMENTAL_AMPLITUDE
            + (0..FORMANT_WEIGHTS.len())
                .map(|k| self.formant_amplitude(k))
                .sum::<f64>();
        if self.noise {
            peak += NOISE_AMPLITUDE;
        }
        if self.sub_harmonic {
            peak += self.sub_harmonic_amplitude();
        }
        (peak * self.amplitude_multiplier / 2.0).abs()
    }

    /// Output file name (`<output_id>.wav`).
    pub fn file_name(&self) -> String {
        format!("{}.wav", self.output_id)
    }
}

pub(crate) fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}
pub(crate) fn default_duration_seconds() -> f64 {
    DEFAULT_DURATION_SECONDS
}
pub(crate) fn default_amplitude_decay() -> f64 {
    DEFAULT_AMPLITUDE_DECAY
}
pub(crate) fn default_amplitude_multiplier() -> f64 {
    DEFAULT_AMPLITUDE_MULTIPLIER
}
pub(crate) fn default_jitter_range_hz() -> u32 {
    DEFAULT_JITTER_RANGE_HZ
}
pub(crate) fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_total_samples() {
        let request = SynthesisRequest::new("A", 440.0);
        assert_eq!(request.total_samples(), 220_500);

        let short = request.clone().with_duration(0.5).with_sample_rate(22_050);
        assert_eq!(short.total_samples(), 11_025);

        let empty = request.with_duration(0.0);
        assert_eq!(empty.total_samples(), 0);
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let request: SynthesisRequest =
            serde_json::from_str(r#"{"output_id": "A", "fundamental_hz": 440}"#).unwrap();
        assert_eq!(request, SynthesisRequest::new("A", 440.0));
    }

    #[test]
    fn test_overflow_policy_serializes_snake_case() {
        let json = serde_json::to_string(&OverflowPolicy::Error).unwrap();
        assert_eq!(json, "\"error\"");
        let parsed: OverflowPolicy = serde_json::from_str("\"clamp\"").unwrap();
        assert_eq!(parsed, OverflowPolicy::Clamp);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let parsed: Result<SynthesisRequest, _> =
            serde_json::from_str(r#"{"output_id": "A", "fundamental_hz": 440, "gain": 2}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_formant_amplitudes_decrease() {
        let request = SynthesisRequest::new("A", 440.0);
        let amps: Vec<f64> = (0..5).map(|k| request.formant_amplitude(k)).collect();
        assert!(amps.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(amps[4], 1.0 / 6.0);
        assert_eq!(request.sub_harmonic_amplitude(), 0.5);
    }

    #[test]
    fn test_peak_estimate_default_preset() {
        // 1 + 15/6 + 0.3 = 3.8, times 8000 / 2
        let request = SynthesisRequest::new("A", 440.0);
        assert!((request.peak_estimate() - 15_200.0).abs() < 1e-9);

        let with_sub = request.with_sub_harmonic(true);
        assert!((with_sub.peak_estimate() - 17_200.0).abs() < 1e-9);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(SynthesisRequest::new("cry_b", 440.0).file_name(), "cry_b.wav");
    }
}
