//! crysynth request and preset library
//!
//! This crate holds the plain-data side of crysynth: what a synthesis request
//! looks like, what a synthesis produces, how presets are written down, and
//! how all of it is validated before the audio backend sees it.
//!
//! # Example
//!
//! ```
//! use crysynth_spec::{validate_request, SynthesisRequest};
//!
//! let request = SynthesisRequest::new("A", 440.0)
//!     .with_duration(1.0)
//!     .with_sub_harmonic(true);
//!
//! let result = validate_request(&request);
//! assert!(result.is_ok());
//! assert_eq!(request.total_samples(), 44_100);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error codes, validation results, and the `BackendError` trait
//! - [`request`]: The synthesis request and its defaults
//! - [`result`]: The per-file result record
//! - [`preset`]: Preset files and the built-in presets
//! - [`validation`]: Request validation

pub mod error;
pub mod preset;
pub mod request;
pub mod result;
pub mod validation;

pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use preset::{PlannedRequest, Preset, PresetFile, Settings, DEFAULT_SEED};
pub use request::{OverflowPolicy, SynthesisRequest};
pub use result::{SynthesisResult, FORMANT_COUNT};
pub use validation::{is_safe_output_id, validate_request};
