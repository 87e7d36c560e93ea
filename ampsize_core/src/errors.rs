//! # Error Types
//!
//! Structured error types for ampsize_core. Every failure of a sizing
//! calculation is a user-input validation failure; the engine has no I/O and
//! no transient failures. Settings files are the only I/O and carry their own
//! variants.
//!
//! A calculation that finds no adequate wire or busbar is *not* an error: the
//! result simply carries `None` for that lookup.
//!
//! ## Example
//!
//! ```rust
//! use ampsize_core::errors::{CalcError, CalcResult};
//!
//! fn validate_power(power_w: f64) -> CalcResult<()> {
//!     if !power_w.is_finite() || power_w <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "power",
//!             power_w.to_string(),
//!             "Power must be a positive number",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_power(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for ampsize_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for sizing operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// No voltage system was selected
    #[error("No selection made for '{field}'")]
    MissingSelection { field: String },

    /// The voltage system token is not one of the supported presets
    #[error("Unknown voltage system: '{token}'")]
    UnknownVoltageSystem { token: String },

    /// An input value is invalid (non-finite, zero, negative)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Settings file I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Settings schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

/// Flat `{kind, message}` view of an error for presentation layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorReport {
    pub kind: String,
    pub message: String,
}

impl CalcError {
    /// Create a MissingSelection error
    pub fn missing_selection(field: impl Into<String>) -> Self {
        CalcError::MissingSelection {
            field: field.into(),
        }
    }

    /// Create an UnknownVoltageSystem error
    pub fn unknown_voltage_system(token: impl Into<String>) -> Self {
        CalcError::UnknownVoltageSystem {
            token: token.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// The offending field, for input validation errors
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::MissingSelection { field } => Some(field),
            CalcError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MissingSelection { .. } => "MISSING_SELECTION",
            CalcError::UnknownVoltageSystem { .. } => "UNKNOWN_VOLTAGE_SYSTEM",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }

    /// Flatten into a `{kind, message}` report
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}
