//! # Error Types
//!
//! Structured error types for calc_core. The estimator and the form
//! controller only ever raise [`CalcError::InvalidInput`]; the remaining
//! variants come from loading settings files.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_area(area_sqft: f64) -> CalcResult<()> {
//!     if area_sqft <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "area_sqft".to_string(),
//!             value: area_sqft.to_string(),
//!             reason: "Area must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::form::FORM_INCOMPLETE_MESSAGE;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for estimator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A required value is missing, not a number, or not positive
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error for a field that was left blank
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::invalid_input(field, "", "Required field is empty")
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for the input-validation failure raised by the estimator
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. })
    }

    /// Name of the offending field, if the error concerns one
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }

    /// Message suitable for showing to someone filling in the form.
    ///
    /// Validation failures collapse to one generic prompt; other errors
    /// use their full description.
    pub fn user_message(&self) -> String {
        match self {
            CalcError::InvalidInput { .. } => FORM_INCOMPLETE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}
