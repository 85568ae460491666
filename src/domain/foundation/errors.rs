//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised when decision inputs fail validation.
///
/// All of these are detected before any computation starts, so a caller that
/// receives one is guaranteed that no partial result was produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Decision matrix must contain at least one alternative and one criterion")]
    EmptyMatrix,

    #[error("Row {row} has {actual} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Value at row {row}, column {column} must be greater than 0, got {value}")]
    NonPositiveEntry { row: usize, column: usize, value: f64 },

    #[error("Value at row {row}, column {column} is not a finite number")]
    NonFiniteEntry { row: usize, column: usize },

    #[error("At least {required} criteria are required, got {actual}")]
    TooFewCriteria { required: usize, actual: usize },

    #[error("Length of '{field}' must be {expected}, got {actual}")]
    LengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Index {index} is out of range for '{field}' (length {len})")]
    IndexOutOfRange {
        field: String,
        index: usize,
        len: usize,
    },

    #[error("Cannot remove the last remaining entry of '{field}'")]
    LastEntry { field: String },

    #[error("Weights must be finite and non-negative, got {value} at index {index}")]
    InvalidWeight { index: usize, value: f64 },

    #[error("Weights must sum to 1.0, got {sum}")]
    WeightSum { sum: f64 },

    #[error("Unknown criterion type '{value}', expected 'beneficial' or 'cost'")]
    UnknownCriterionType { value: String },

    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },
}

impl ValidationError {
    /// Creates a length mismatch error.
    pub fn length_mismatch(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        ValidationError::LengthMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Creates an index out of range error.
    pub fn index_out_of_range(field: impl Into<String>, index: usize, len: usize) -> Self {
        ValidationError::IndexOutOfRange {
            field: field.into(),
            index,
            len,
        }
    }

    /// Creates a last entry error.
    pub fn last_entry(field: impl Into<String>) -> Self {
        ValidationError::LastEntry {
            field: field.into(),
        }
    }

    /// Creates an empty field error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Returns the name of the input the error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyMatrix
            | ValidationError::RaggedRow { .. }
            | ValidationError::NonPositiveEntry { .. }
            | ValidationError::NonFiniteEntry { .. } => "matrix",
            ValidationError::TooFewCriteria { .. } => "criteria",
            ValidationError::UnknownCriterionType { .. } => "criterion_type",
            ValidationError::InvalidWeight { .. } | ValidationError::WeightSum { .. } => "weights",
            ValidationError::LengthMismatch { field, .. }
            | ValidationError::IndexOutOfRange { field, .. }
            | ValidationError::LastEntry { field }
            | ValidationError::EmptyField { field } => field,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Boundary errors
    ImportFailed,
    ExportFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::ImportFailed => "IMPORT_FAILED",
            ErrorCode::ExportFailed => "EXPORT_FAILED",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::validation(err.field().to_string(), err.to_string())
    }
}
