//! Request validation.
//!
//! Every check runs before any sample is computed or any random value is
//! drawn, so an invalid request never consumes randomness or touches disk.

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::request::{OverflowPolicy, SynthesisRequest};

/// Size of the RIFF/fmt/data headers that precede the PCM payload.
const WAV_HEADER_BYTES: u64 = 36;

/// Largest quantized magnitude a 16-bit sample can hold.
const PCM16_PEAK: f64 = i16::MAX as f64;

/// Validates a single synthesis request.
pub fn validate_request(request: &SynthesisRequest) -> ValidationResult {
    let mut result = ValidationResult::success();

    for message in output_id_safety_errors(&request.output_id) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidOutputId,
            message,
            "output_id",
        ));
    }

    let f0 = request.fundamental_hz;
    let f0_ok = f0.is_finite() && f0 > 0.0;
    if !f0_ok {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidFrequency,
            format!("fundamental must be a positive finite frequency, got {}", f0),
            "fundamental_hz",
        ));
    }

    if request.sample_rate == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSampleRate,
            "sample rate must be positive",
            "sample_rate",
        ));
    }

    let duration = request.duration_seconds;
    let duration_ok = duration.is_finite() && duration >= 0.0;
    if !duration_ok {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDuration,
            format!("duration must be a non-negative finite number, got {}", duration),
            "duration_seconds",
        ));
    } else if request.sample_rate > 0 {
        let payload = (request.total_samples() as u64).saturating_mul(2);
        if payload.saturating_add(WAV_HEADER_BYTES) > u32::MAX as u64 {
            result.add_error(ValidationError::with_path(
                ErrorCode::PayloadTooLarge,
                format!(
                    "{} s at {} Hz does not fit a 16-bit WAV file",
                    duration, request.sample_rate
                ),
                "duration_seconds",
            ));
        } else if request.total_samples() == 0 {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::EmptyOutput,
                "duration rounds to zero samples, the file will be empty",
                "duration_seconds",
            ));
        }
    }

    let decay = request.amplitude_decay;
    if !(decay.is_finite() && decay > 0.0) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidAmplitude,
            format!("amplitude decay must be positive and finite, got {}", decay),
            "amplitude_decay",
        ));
    }

    if !request.amplitude_multiplier.is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidAmplitude,
            format!(
                "amplitude multiplier must be finite, got {}",
                request.amplitude_multiplier
            ),
            "amplitude_multiplier",
        ));
    }

    if f0_ok {
        let jitter = request.jitter_range_hz as f64;
        let lowest = if request.sub_harmonic {
            f0 / 2.0 - jitter
        } else {
            f0 * 2.0 - jitter
        };
        if lowest <= 0.0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::JitterOutOfRange,
                format!(
                    "jitter of {} Hz can push a component of a {} Hz fundamental to {} Hz",
                    request.jitter_range_hz, f0, lowest
                ),
                "jitter_range_hz",
            ));
        }
    }

    if result.is_ok() && request.peak_estimate() > PCM16_PEAK {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::LikelyClipping,
            format!(
                "worst-case peak {:.0} exceeds {} and will be {}",
                request.peak_estimate(),
                i16::MAX,
                match request.overflow {
                    OverflowPolicy::Clamp => "clamped",
                    OverflowPolicy::Error => "rejected if reached",
                }
            ),
            "amplitude_multiplier",
        ));
    }

    result
}

/// Checks whether an output identifier is usable as a file stem.
pub fn is_safe_output_id(output_id: &str) -> bool {
    output_id_safety_errors(output_id).is_empty()
}

pub(crate) fn output_id_safety_errors(output_id: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if output_id.trim().is_empty() {
        errors.push("output id cannot be empty".to_string());
        return errors;
    }

    if output_id.contains('/') || output_id.contains('\\') {
        errors.push(format!(
            "output id must not contain path separators: '{}'",
            output_id
        ));
    }

    if output_id.starts_with('.') {
        errors.push(format!("output id must not start with '.': '{}'", output_id));
    }

    if output_id.contains(':') {
        errors.push(format!("output id must not contain ':': '{}'", output_id));
    }

    if output_id.chars().any(char::is_control) {
        errors.push("output id must not contain control characters".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(result: &ValidationResult) -> Vec<ErrorCode> {
        result.errors.iter().map(|e| e.code).collect()
    }

    #[test]
    fn test_default_request_is_valid() {
        let result = validate_request(&SynthesisRequest::new("A", 440.0));
        assert!(result.is_ok(), "{:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_non_positive_fundamental() {
        for f0 in [0.0, -440.0, f64::NAN, f64::INFINITY] {
            let result = validate_request(&SynthesisRequest::new("A", f0));
            assert_eq!(codes(&result), vec![ErrorCode::InvalidFrequency], "f0 = {}", f0);
        }
    }

    #[test]
    fn test_zero_sample_rate() {
        let request = SynthesisRequest::new("A", 440.0).with_sample_rate(0);
        let result = validate_request(&request);
        assert_eq!(codes(&result), vec![ErrorCode::InvalidSampleRate]);
    }

    #[test]
    fn test_negative_duration() {
        let request = SynthesisRequest::new("A", 440.0).with_duration(-1.0);
        let result = validate_request(&request);
        assert_eq!(codes(&result), vec![ErrorCode::InvalidDuration]);
    }

    #[test]
    fn test_zero_duration_is_valid_with_warning() {
        let request = SynthesisRequest::new("A", 440.0).with_duration(0.0);
        let result = validate_request(&request);
        assert!(result.is_ok());
        assert_eq!(result.warnings[0].code, WarningCode::EmptyOutput);
    }

    #[test]
    fn test_payload_too_large() {
        let request = SynthesisRequest::new("A", 440.0)
            .with_sample_rate(192_000)
            .with_duration(100_000.0);
        let result = validate_request(&request);
        assert_eq!(codes(&result), vec![ErrorCode::PayloadTooLarge]);
    }

    #[test]
    fn test_bad_amplitudes() {
        let request = SynthesisRequest::new("A", 440.0)
            .with_amplitude_decay(0.0)
            .with_amplitude_multiplier(f64::NAN);
        let result = validate_request(&request);
        assert_eq!(
            codes(&result),
            vec![ErrorCode::InvalidAmplitude, ErrorCode::InvalidAmplitude]
        );
    }

    #[test]
    fn test_jitter_must_keep_sub_harmonic_positive() {
        // 100 Hz fundamental: sub-harmonic is 50 +/- jitter
        let request = SynthesisRequest::new("A", 100.0)
            .with_sub_harmonic(true)
            .with_jitter_range(50);
        let result = validate_request(&request);
        assert_eq!(codes(&result), vec![ErrorCode::JitterOutOfRange]);

        // Without the sub-harmonic only the lowest formant (200 Hz) matters
        let request = request.with_sub_harmonic(false);
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_unsafe_output_ids() {
        for id in ["", "  ", "../up", "a/b", "a\\b", ".hidden", "c:drive", "tab\tid"] {
            let result = validate_request(&SynthesisRequest::new(id, 440.0));
            assert!(
                codes(&result).contains(&ErrorCode::InvalidOutputId),
                "id {:?} should be rejected",
                id
            );
        }
        assert!(is_safe_output_id("cry_440-B"));
    }

    #[test]
    fn test_likely_clipping_warning() {
        let request = SynthesisRequest::new("A", 440.0).with_amplitude_multiplier(40_000.0);
        let result = validate_request(&request);
        assert!(result.is_ok());
        assert_eq!(result.warnings[0].code, WarningCode::LikelyClipping);
        assert!(result.warnings[0].message.contains("clamped"));

        let strict = request.with_overflow(OverflowPolicy::Error);
        let result = validate_request(&strict);
        assert!(result.warnings[0].message.contains("rejected"));
    }
}
