//! Error types for the ROI calculator.
//!
//! The engine itself is total and has no error path. Errors only arise at the
//! edges: reading configuration, collecting inputs, and writing reports.
//!
//! Validation errors come in two flavours, both accumulated with stillwater's
//! `Validation` so a user sees every problem in one run:
//!
//! - [`InputError`]: an input value rejected by the input layer
//! - [`ConfigIssue`]: a configuration value that makes no sense
//!
//! # Example
//!
//! ```rust
//! use copilot_roi::core::InputField;
//! use copilot_roi::errors::{InputError, ROIError};
//!
//! let err = ROIError::from_input_errors(vec![InputError::out_of_range(
//!     InputField::TimeReduction,
//!     0.95,
//!     0.20,
//!     0.80,
//! )]);
//! assert!(err.to_string().contains("time_reduction"));
//! ```

use crate::core::InputField;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for calculator operations
#[derive(Debug, Error)]
pub enum ROIError {
    /// Configuration file could not be parsed
    #[error("Failed to parse {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// Configuration parsed but failed validation
    #[error("Invalid configuration: {}", join_messages(.0))]
    InvalidConfig(Vec<ConfigIssue>),

    /// File system errors with path context
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One or more inputs rejected by the input layer
    #[error("Invalid inputs: {}", join_messages(.0))]
    InvalidInputs(Vec<InputError>),

    /// Field name that is not part of the input model
    #[error("Unknown input field '{0}'")]
    UnknownField(String),

    /// Attempt to adjust a field that is fixed for the session
    #[error("'{0}' is fixed and cannot be adjusted")]
    ReadOnlyField(InputField),

    /// Value that could not be read as a number
    #[error("Invalid value '{value}' for {field}")]
    InvalidValue { field: String, value: String },
}

impl ROIError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn from_input_errors(errors: Vec<InputError>) -> Self {
        Self::InvalidInputs(errors)
    }

    /// Errors the user can fix by changing what they typed.
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

pub type ROIResult<T> = Result<T, ROIError>;

/// Why an input value was rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputErrorKind {
    OutOfRange { min: f64, max: f64 },
    NonFinite,
    ReadOnly,
}

/// An input value rejected by the input layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputError {
    pub field: InputField,
    pub value: f64,
    pub kind: InputErrorKind,
}

impl InputError {
    pub fn out_of_range(field: InputField, value: f64, min: f64, max: f64) -> Self {
        Self {
            field,
            value,
            kind: InputErrorKind::OutOfRange { min, max },
        }
    }

    pub fn non_finite(field: InputField, value: f64) -> Self {
        Self {
            field,
            value,
            kind: InputErrorKind::NonFinite,
        }
    }

    pub fn read_only(field: InputField, value: f64) -> Self {
        Self {
            field,
            value,
            kind: InputErrorKind::ReadOnly,
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            InputErrorKind::OutOfRange { min, max } => write!(
                f,
                "{}: {} is outside the allowed range {}..={}",
                self.field, self.value, min, max
            ),
            InputErrorKind::NonFinite => write!(f, "{}: value must be finite", self.field),
            InputErrorKind::ReadOnly => write!(f, "{}: value is fixed", self.field),
        }
    }
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigIssue {
    /// Dotted path to the offending key, e.g. `ranges.hourly_wage.step`.
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_messages<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_inputs_lists_every_error() {
        let err = ROIError::from_input_errors(vec![
            InputError::out_of_range(InputField::HourlyWage, 5.0, 15.0, 50.0),
            InputError::non_finite(InputField::MonthlyTickets, f64::NAN),
        ]);
        let message = err.to_string();
        assert!(message.contains("hourly_wage: 5 is outside the allowed range 15..=50"));
        assert!(message.contains("monthly_tickets: value must be finite"));
    }

    #[test]
    fn test_io_error_is_not_user_fixable() {
        let err = ROIError::io(
            "report.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!err.is_user_fixable());
        assert!(ROIError::UnknownField("x".into()).is_user_fixable());
    }

    #[test]
    fn test_read_only_message() {
        let err = ROIError::ReadOnlyField(InputField::ImplementationCost);
        assert_eq!(
            err.to_string(),
            "'implementation_cost' is fixed and cannot be adjusted"
        );
    }
}
