//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' must be at least {min}, got {actual}")]
    BelowMinimum { field: String, min: i64, actual: i64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a below minimum validation error.
    pub fn below_minimum(field: impl Into<String>, min: i64, actual: i64) -> Self {
        ValidationError::BelowMinimum {
            field: field.into(),
            min,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::BelowMinimum { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }

    /// Returns a human-readable reason without the field prefix.
    pub fn reason(&self) -> String {
        match self {
            ValidationError::EmptyField { .. } => "value is empty".to_string(),
            ValidationError::OutOfRange {
                min, max, actual, ..
            } => format!("{} is outside {}..={}", actual, min, max),
            ValidationError::BelowMinimum { min, actual, .. } => {
                format!("{} is below {}", actual, min)
            }
            ValidationError::InvalidFormat { reason, .. } => reason.clone(),
        }
    }
}

/// A staged builder was asked to finish before every required field was set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot build {record}: missing required fields [{}]", .missing.join(", "))]
pub struct IncompleteBuilderError {
    /// Name of the record the builder produces.
    pub record: &'static str,
    /// Every required field still unset, in declaration order.
    pub missing: Vec<&'static str>,
}

impl IncompleteBuilderError {
    pub fn new(record: &'static str, missing: Vec<&'static str>) -> Self {
        Self { record, missing }
    }

    /// Returns true if `field` is among the missing fields.
    pub fn is_missing(&self, field: &str) -> bool {
        self.missing.iter().any(|m| *m == field)
    }
}

/// Any failure of a single construction attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Incomplete(#[from] IncompleteBuilderError),
}

impl ConstructionError {
    /// Returns the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ConstructionError::Validation(ValidationError::EmptyField { .. }) => {
                ErrorCode::EmptyField
            }
            ConstructionError::Validation(ValidationError::OutOfRange { .. }) => {
                ErrorCode::OutOfRange
            }
            ConstructionError::Validation(ValidationError::BelowMinimum { .. }) => {
                ErrorCode::BelowMinimum
            }
            ConstructionError::Validation(ValidationError::InvalidFormat { .. }) => {
                ErrorCode::InvalidFormat
            }
            ConstructionError::Incomplete(_) => ErrorCode::IncompleteBuilder,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    OutOfRange,
    BelowMinimum,
    InvalidFormat,

    // Builder errors
    IncompleteBuilder,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::BelowMinimum => "BELOW_MINIMUM",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::IncompleteBuilder => "INCOMPLETE_BUILDER",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("name");
        assert_eq!(format!("{}", err), "Field 'name' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("age", 0, 120, 150);
        assert_eq!(
            format!("{}", err),
            "Field 'age' must be between 0 and 120, got 150"
        );
    }

    #[test]
    fn validation_error_below_minimum_displays_correctly() {
        let err = ValidationError::below_minimum("salary", 0, -5);
        assert_eq!(
            format!("{}", err),
            "Field 'salary' must be at least 0, got -5"
        );
        assert_eq!(err.reason(), "-5 is below 0");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("email", "missing @ symbol");
        assert_eq!(
            format!("{}", err),
            "Field 'email' has invalid format: missing @ symbol"
        );
    }

    #[test]
    fn validation_error_exposes_field_and_reason() {
        let err = ValidationError::out_of_range("age", 0, 120, -1);
        assert_eq!(err.field(), "age");
        assert_eq!(err.reason(), "-1 is outside 0..=120");

        let err = ValidationError::invalid_format("email", "missing @ symbol");
        assert_eq!(err.reason(), "missing @ symbol");
    }

    #[test]
    fn incomplete_builder_error_lists_every_missing_field() {
        let err = IncompleteBuilderError::new("Employee", vec!["email", "salary"]);
        assert_eq!(
            format!("{}", err),
            "Cannot build Employee: missing required fields [email, salary]"
        );
        assert!(err.is_missing("email"));
        assert!(err.is_missing("salary"));
        assert!(!err.is_missing("name"));
    }

    #[test]
    fn construction_error_maps_to_codes() {
        let validation: ConstructionError = ValidationError::empty_field("name").into();
        assert_eq!(validation.code(), ErrorCode::EmptyField);

        let incomplete: ConstructionError =
            IncompleteBuilderError::new("Person", vec!["age"]).into();
        assert_eq!(incomplete.code(), ErrorCode::IncompleteBuilder);
    }

    #[test]
    fn construction_error_display_is_transparent() {
        let err: ConstructionError = ValidationError::empty_field("name").into();
        assert_eq!(format!("{}", err), "Field 'name' cannot be empty");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::OutOfRange), "OUT_OF_RANGE");
        assert_eq!(format!("{}", ErrorCode::IncompleteBuilder), "INCOMPLETE_BUILDER");
    }
}
