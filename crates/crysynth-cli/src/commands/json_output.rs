//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag on
//! `generate` and `validate`, so scripts can read results without scraping
//! colored text.

use anyhow::Result;
use crysynth_backend_audio::AudioError;
use crysynth_spec::{BackendError, SynthesisResult, ValidationError, ValidationWarning};
use serde::{Deserialize, Serialize};

use crate::input::{InputError, SourceKind};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Format: CLI_XXX for CLI-level errors; validation and audio errors pass
/// their own codes through.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Preset file is not valid JSON or has unknown fields
    pub const JSON_PARSE: &str = "CLI_002";
    /// `--only` named an output id the file does not contain
    pub const UNKNOWN_PRESET: &str = "CLI_003";
    /// Output directory could not be created
    pub const OUTPUT_DIR: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001", "AUDIO_005")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Output id of the preset being rendered (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_id: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
            output_id: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Sets the preset output id for this error.
    pub fn with_output_id(mut self, output_id: impl Into<String>) -> Self {
        self.output_id = Some(output_id.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the JSON path for this warning.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Output ids declared by the file, in order
    pub presets: Vec<String>,
    /// BLAKE3 hash of the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// One file written by `generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Seed the request's generator was created from
    pub seed: u32,
    /// Synthesis result record
    #[serde(flatten)]
    pub result: SynthesisResult,
}

/// JSON output for the `generate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether every preset was written
    pub success: bool,
    /// Errors encountered during loading, validation or generation
    pub errors: Vec<JsonError>,
    /// Warnings from validation
    pub warnings: Vec<JsonWarning>,
    /// Where the presets came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_kind: Option<SourceKind>,
    /// Output directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
    /// Base seed per-preset seeds were derived from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_seed: Option<u32>,
    /// Files written, in preset order
    pub files: Vec<GeneratedFile>,
    /// BLAKE3 hash of the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl GenerateOutput {
    /// Creates a failed output carrying only errors.
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            source_kind: None,
            out_dir: None,
            base_seed: None,
            files: Vec::new(),
            source_hash: None,
            duration_ms: 0,
        }
    }
}

/// Converts a validation error to JSON.
pub fn validation_error_to_json(error: &ValidationError) -> JsonError {
    let json = JsonError::new(error.code.code(), &error.message);
    match &error.path {
        Some(path) => json.with_path(path),
        None => json,
    }
}

/// Converts a validation warning to JSON.
pub fn validation_warning_to_json(warning: &ValidationWarning) -> JsonWarning {
    let json = JsonWarning::new(warning.code.code(), &warning.message);
    match &warning.path {
        Some(path) => json.with_path(path),
        None => json,
    }
}

/// Converts a preset loading error to JSON.
pub fn input_error_to_json(error: &InputError) -> JsonError {
    let code = match error {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::Parse { .. } => error_codes::JSON_PARSE,
    };
    JsonError::new(code, error.to_string()).with_file(error.path().display().to_string())
}

/// Converts a synthesis error for one preset to JSON.
pub fn audio_error_to_json(error: &AudioError, output_id: &str) -> JsonError {
    JsonError::new(error.code(), error.to_string()).with_output_id(output_id)
}

/// Prints `output` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(output: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}
