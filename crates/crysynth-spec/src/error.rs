//! Error types for request validation and preset loading.

use thiserror::Error;

/// Stable error codes for request and preset validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Fundamental frequency is not a positive finite number
    InvalidFrequency,
    /// E002: Sample rate is zero
    InvalidSampleRate,
    /// E003: Duration is negative or not finite
    InvalidDuration,
    /// E004: Amplitude decay or multiplier out of range
    InvalidAmplitude,
    /// E005: Output identifier is empty or not a safe file stem
    InvalidOutputId,
    /// E006: Jitter range can push a derived frequency to zero or below
    JitterOutOfRange,
    /// E007: Two presets share an output identifier
    DuplicateOutputId,
    /// E008: Preset file declares no presets
    NoPresets,
    /// E009: Sample payload does not fit a WAV file
    PayloadTooLarge,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFrequency => "E001",
            ErrorCode::InvalidSampleRate => "E002",
            ErrorCode::InvalidDuration => "E003",
            ErrorCode::InvalidAmplitude => "E004",
            ErrorCode::InvalidOutputId => "E005",
            ErrorCode::JitterOutOfRange => "E006",
            ErrorCode::DuplicateOutputId => "E007",
            ErrorCode::NoPresets => "E008",
            ErrorCode::PayloadTooLarge => "E009",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for requests that are valid but probably not what was meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Worst-case peak exceeds the 16-bit range and will be clamped
    LikelyClipping,
    /// W002: Zero duration, the output file will hold no samples
    EmptyOutput,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::LikelyClipping => "W001",
            WarningCode::EmptyOutput => "W002",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "presets\[0\].fundamental_hz").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Returns a copy with `prefix` prepended to the JSON path.
    pub fn prefixed(mut self, prefix: &str) -> Self {
        self.path = Some(match self.path.take() {
            Some(path) => format!("{}.{}", prefix, path),
            None => prefix.to_string(),
        });
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Returns a copy with `prefix` prepended to the JSON path.
    pub fn prefixed(mut self, prefix: &str) -> Self {
        self.path = Some(match self.path.take() {
            Some(path) => format!("{}.{}", prefix, path),
            None => prefix.to_string(),
        });
        self
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for preset file operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Validation failed with one or more errors.
    #[error("validation failed with {} error(s): {}", .0.len(), first_message(.0))]
    ValidationFailed(Vec<ValidationError>),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn first_message(errors: &[ValidationError]) -> String {
    errors
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Errors and warnings collected while validating a request or preset file.
///
/// Validation never stops at the first problem, so a caller can report every
/// error in one pass.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Validation errors; any error makes the result a failure.
    pub errors: Vec<ValidationError>,
    /// Validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// An empty, passing result.
    pub fn success() -> Self {
        Self::default()
    }

    /// Records an error.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Records a warning.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Folds another result into this one, prefixing its paths.
    pub fn merge_prefixed(&mut self, other: ValidationResult, prefix: &str) {
        self.errors
            .extend(other.errors.into_iter().map(|e| e.prefixed(prefix)));
        self.warnings
            .extend(other.warnings.into_iter().map(|w| w.prefixed(prefix)));
    }

    /// True when no error was recorded.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Warnings on success, errors on failure.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.is_ok() {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

/// Common trait for backend errors.
///
/// Gives every backend error a stable code and a category so the CLI can
/// report failures uniformly, in both human and JSON output.
pub trait BackendError: std::error::Error {
    /// Stable error code such as "AUDIO_001".
    fn code(&self) -> &'static str;

    /// Human-readable message; defaults to `Display`.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category for grouping related errors (e.g. "audio").
    fn category(&self) -> &'static str;
}
