//! Error types for configuration validation and processing.

use thiserror::Error;

/// Error codes for configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Scale errors (E001-E003)
    /// E001: Configured scale name is not in the scale table
    UnknownScale,
    /// E002: A scale table entry violates the degree invariants
    MalformedScale,
    /// E003: A scale table entry has an empty name
    EmptyScaleName,

    // Pitch and timing errors (E010-E016)
    /// E010: Base pitch outside the MIDI key range
    BasePitchOutOfRange,
    /// E011: Unit beats not a positive finite number
    InvalidUnitBeats,
    /// E012: Chord duration not a positive finite number
    InvalidChordDuration,
    /// E013: Tempo too slow to encode or zero
    TempoOutOfRange,
    /// E014: Ticks-per-beat outside the 15-bit SMF division range
    TicksPerBeatOutOfRange,
    /// E015: Run clamp window empty or starting at zero
    InvalidRunWindow,
    /// E016: Instrument program outside 0-127
    InstrumentOutOfRange,

    // Channel errors (E020)
    /// E020: MIDI channel outside 0-15
    ChannelOutOfRange,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnknownScale => "E001",
            ErrorCode::MalformedScale => "E002",
            ErrorCode::EmptyScaleName => "E003",
            ErrorCode::BasePitchOutOfRange => "E010",
            ErrorCode::InvalidUnitBeats => "E011",
            ErrorCode::InvalidChordDuration => "E012",
            ErrorCode::TempoOutOfRange => "E013",
            ErrorCode::TicksPerBeatOutOfRange => "E014",
            ErrorCode::InvalidRunWindow => "E015",
            ErrorCode::InstrumentOutOfRange => "E016",
            ErrorCode::ChannelOutOfRange => "E020",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Path to the problematic field (e.g., "scales.dorian").
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

    /// Creates a new validation error with a field path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
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

/// Top-level error type for configuration handling.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Config validation failed with one or more errors.
    #[error("config validation failed with {} error(s): {}", .0.len(), join_errors(.0))]
    ValidationFailed(Vec<ValidationError>),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result of config validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self::default()
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if any error carries the given code.
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<(), SpecError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(SpecError::ValidationFailed(self.errors))
        }
    }
}

/// Common trait for backend errors.
///
/// Gives every backend error a stable code and a category so callers can
/// report failures uniformly without matching on backend-specific enums.
pub trait BackendError: std::error::Error {
    /// Stable error code, e.g. "MIDI_001".
    fn code(&self) -> &'static str;

    /// Human-readable message. Defaults to the `Display` output.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category, e.g. "midi".
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::UnknownScale.code(), "E001");
        assert_eq!(ErrorCode::MalformedScale.code(), "E002");
        assert_eq!(ErrorCode::TicksPerBeatOutOfRange.code(), "E014");
        assert_eq!(ErrorCode::ChannelOutOfRange.code(), "E020");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ErrorCode::UnknownScale, "unknown scale 'dorian'");
        assert_eq!(err.to_string(), "E001: unknown scale 'dorian'");

        let err_with_path = ValidationError::with_path(
            ErrorCode::MalformedScale,
            "degrees must start at 0",
            "scales.blues",
        );
        assert_eq!(
            err_with_path.to_string(),
            "E002: degrees must start at 0 (at scales.blues)"
        );
    }

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::success();
        assert!(result.is_ok());

        result.add_error(ValidationError::new(ErrorCode::TempoOutOfRange, "bpm 0"));
        assert!(!result.is_ok());
        assert!(result.has_code(ErrorCode::TempoOutOfRange));
        assert!(!result.has_code(ErrorCode::UnknownScale));

        let err = result.into_result().unwrap_err();
        assert!(err.to_string().contains("E013: bpm 0"));
    }
}
