//! Error types for the audio backend.

use std::path::PathBuf;

use crysynth_spec::{BackendError, ValidationError};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis or output.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The request failed validation.
    #[error("invalid synthesis request: {}", first_error(.0))]
    InvalidRequest(Vec<ValidationError>),

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Two component buffers that were about to be summed differ in length.
    #[error("component length mismatch: expected {expected} samples, got {found}")]
    LengthMismatch {
        /// Length of the signal buffer.
        expected: usize,
        /// Length of the component buffer.
        found: usize,
    },

    /// A scaled sample fell outside the 16-bit range under the `error` policy.
    #[error("sample {index} quantizes to {value}, outside the 16-bit range")]
    QuantizationOverflow {
        /// Sample index.
        index: usize,
        /// Rounded value before saturation.
        value: f64,
    },

    /// Writing the output file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates a write error for `path`.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

impl From<Vec<ValidationError>> for AudioError {
    fn from(errors: Vec<ValidationError>) -> Self {
        AudioError::InvalidRequest(errors)
    }
}

fn first_error(errors: &[ValidationError]) -> String {
    errors.first().map(ToString::to_string).unwrap_or_default()
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidRequest(_) => "AUDIO_001",
            AudioError::InvalidSampleRate { .. } => "AUDIO_002",
            AudioError::InvalidFrequency { .. } => "AUDIO_003",
            AudioError::LengthMismatch { .. } => "AUDIO_004",
            AudioError::QuantizationOverflow { .. } => "AUDIO_005",
            AudioError::Write { .. } => "AUDIO_006",
            AudioError::Io(_) => "AUDIO_007",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crysynth_spec::ErrorCode;

    #[test]
    fn test_invalid_request_from_validation_errors() {
        let err: AudioError = vec![
            ValidationError::with_path(ErrorCode::InvalidSampleRate, "zero", "sample_rate"),
            ValidationError::new(ErrorCode::InvalidDuration, "negative"),
        ]
        .into();
        assert_eq!(err.code(), "AUDIO_001");
        assert!(err.to_string().contains("E002"));
    }

    #[test]
    fn test_write_error_mentions_path() {
        let err = AudioError::write(
            "/nowhere/A.wav",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing directory"),
        );
        let text = err.to_string();
        assert!(text.contains("A.wav"));
        assert!(text.contains("missing directory"));
        assert_eq!(err.category(), "audio");
    }
}
