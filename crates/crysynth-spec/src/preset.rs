//! Preset files.
//!
//! A preset file is a JSON document holding shared rendering settings and a
//! list of presets. Each preset names a fundamental, the noise flags, and an
//! output id; the settings fill in everything else. Files are validated as a
//! whole when loaded, so a bad entry is reported before any audio is written.
//!
//! ```
//! use crysynth_spec::PresetFile;
//!
//! let file = PresetFile::from_json(r#"{
//!     "presets": [{ "output_id": "A", "fundamental_hz": 440 }]
//! }"#).unwrap();
//! let planned = file.requests().unwrap();
//! assert_eq!(planned[0].request.sample_rate, 44100);
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, SpecError, ValidationError, ValidationResult};
use crate::request::{
    default_amplitude_decay, default_amplitude_multiplier, default_duration_seconds,
    default_jitter_range_hz, default_sample_rate, default_true, OverflowPolicy, SynthesisRequest,
    DEFAULT_AMPLITUDE_DECAY, DEFAULT_AMPLITUDE_MULTIPLIER, DEFAULT_DURATION_SECONDS,
    DEFAULT_JITTER_RANGE_HZ, DEFAULT_SAMPLE_RATE,
};
use crate::validation::validate_request;

/// Base seed used when neither the file nor the command line sets one.
pub const DEFAULT_SEED: u32 = 16_081_991;

/// Settings shared by every preset in a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Output length in seconds.
    #[serde(default = "default_duration_seconds")]
    pub duration_seconds: f64,
    /// Formant amplitude decay factor.
    #[serde(default = "default_amplitude_decay")]
    pub amplitude_decay: f64,
    /// Gain applied before quantization.
    #[serde(default = "default_amplitude_multiplier")]
    pub amplitude_multiplier: f64,
    /// Default jitter range in Hz.
    #[serde(default = "default_jitter_range_hz")]
    pub jitter_range_hz: u32,
    /// Base seed; per-preset seeds are derived from it.
    #[serde(default = "default_seed")]
    pub seed: u32,
    /// Quantization overflow handling.
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration_seconds: DEFAULT_DURATION_SECONDS,
            amplitude_decay: DEFAULT_AMPLITUDE_DECAY,
            amplitude_multiplier: DEFAULT_AMPLITUDE_MULTIPLIER,
            jitter_range_hz: DEFAULT_JITTER_RANGE_HZ,
            seed: DEFAULT_SEED,
            overflow: OverflowPolicy::Clamp,
        }
    }
}

fn default_seed() -> u32 {
    DEFAULT_SEED
}

/// One named preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    /// Output file stem.
    pub output_id: String,
    /// Fundamental frequency in Hz.
    pub fundamental_hz: f64,
    /// Add white noise.
    #[serde(default = "default_true")]
    pub noise: bool,
    /// Add the sub-harmonic band.
    #[serde(default)]
    pub sub_harmonic: bool,
    /// Explicit seed, bypassing derivation from the base seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Jitter range override in Hz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jitter_range_hz: Option<u32>,
}

impl Preset {
    /// Creates a preset with white noise on and no overrides.
    pub fn new(output_id: impl Into<String>, fundamental_hz: f64) -> Self {
        Self {
            output_id: output_id.into(),
            fundamental_hz,
            noise: true,
            sub_harmonic: false,
            seed: None,
            jitter_range_hz: None,
        }
    }

    /// Enables or disables the sub-harmonic band.
    pub fn with_sub_harmonic(mut self, sub_harmonic: bool) -> Self {
        self.sub_harmonic = sub_harmonic;
        self
    }

    /// Builds the full request for this preset under `settings`.
    pub fn to_request(&self, settings: &Settings) -> SynthesisRequest {
        SynthesisRequest {
            output_id: self.output_id.clone(),
            fundamental_hz: self.fundamental_hz,
            sample_rate: settings.sample_rate,
            duration_seconds: settings.duration_seconds,
            amplitude_decay: settings.amplitude_decay,
            amplitude_multiplier: settings.amplitude_multiplier,
            jitter_range_hz: self.jitter_range_hz.unwrap_or(settings.jitter_range_hz),
            noise: self.noise,
            sub_harmonic: self.sub_harmonic,
            overflow: settings.overflow,
        }
    }
}

/// A validated request ready to render, with its seed override if any.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRequest {
    /// The full request.
    pub request: SynthesisRequest,
    /// Seed set on the preset itself.
    pub seed: Option<u32>,
}

/// A preset file: shared settings plus an ordered list of presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetFile {
    /// Shared settings.
    #[serde(default)]
    pub settings: Settings,
    /// Presets, rendered in order.
    pub presets: Vec<Preset>,
}

impl Default for PresetFile {
    /// The four built-in cry presets.
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            presets: vec![
                Preset::new("A", 440.0),
                Preset::new("B", 440.0).with_sub_harmonic(true),
                Preset::new("C", 575.0),
                Preset::new("D", 575.0).with_sub_harmonic(true),
            ],
        }
    }
}

impl PresetFile {
    /// Parses a preset file from JSON without validating it.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads, parses and validates a preset file.
    pub fn load(path: &Path) -> Result<Self, SpecError> {
        let content = std::fs::read_to_string(path)?;
        let file = Self::from_json(&content)?;
        file.validate()
            .into_result()
            .map_err(SpecError::ValidationFailed)?;
        Ok(file)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates every preset and the file as a whole.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::success();

        if self.presets.is_empty() {
            result.add_error(ValidationError::with_path(
                ErrorCode::NoPresets,
                "preset file declares no presets",
                "presets",
            ));
        }

        let mut seen = HashSet::new();
        for (i, preset) in self.presets.iter().enumerate() {
            let prefix = format!("presets[{}]", i);
            result.merge_prefixed(validate_request(&preset.to_request(&self.settings)), &prefix);

            if !seen.insert(preset.output_id.as_str()) {
                result.add_error(ValidationError::with_path(
                    ErrorCode::DuplicateOutputId,
                    format!("output id '{}' is used more than once", preset.output_id),
                    format!("{}.output_id", prefix),
                ));
            }
        }

        result
    }

    /// Expands presets into requests, failing if any is invalid.
    ///
    /// On success, returns the requests with the validation warnings dropped;
    /// call [`PresetFile::validate`] to inspect them.
    pub fn requests(&self) -> Result<Vec<PlannedRequest>, SpecError> {
        self.validate()
            .into_result()
            .map_err(SpecError::ValidationFailed)?;
        Ok(self
            .presets
            .iter()
            .map(|preset| PlannedRequest {
                request: preset.to_request(&self.settings),
                seed: preset.seed,
            })
            .collect())
    }

    /// Keeps only the presets whose output id is in `ids`, in file order.
    ///
    /// Returns the ids that matched nothing.
    pub fn retain_ids(&mut self, ids: &[String]) -> Vec<String> {
        let missing = ids
            .iter()
            .filter(|id| !self.presets.iter().any(|p| &p.output_id == *id))
            .cloned()
            .collect();
        self.presets.retain(|p| ids.contains(&p.output_id));
        missing
    }
}
