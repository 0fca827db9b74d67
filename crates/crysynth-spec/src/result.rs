//! Synthesis result record.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Number of formants layered over the fundamental.
pub const FORMANT_COUNT: usize = 5;

/// What one synthesis request produced.
///
/// Reported once per output file and then discarded by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisResult {
    /// Output identifier from the request.
    pub output_id: String,
    /// True once the file has been fully written and closed.
    pub saved: bool,
    /// Fundamental frequency used (Hz).
    pub fundamental_hz: f64,
    /// Realized formant frequencies (Hz), jitter included.
    pub formants: [f64; FORMANT_COUNT],
    /// Realized sub-harmonic frequency (Hz), if that band was enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_harmonic_hz: Option<f64>,
    /// Where the file was written, if it was written to disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Number of samples in the file.
    pub num_samples: usize,
    /// Samples saturated during quantization.
    pub clipped_samples: usize,
    /// BLAKE3 hash of the PCM payload (hex).
    pub pcm_hash: String,
}
