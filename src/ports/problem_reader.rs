//! Problem Reader Port - Import interface for decision problems.
//!
//! This port defines the contract for turning an external tabular or
//! structured document into a [`DecisionProblem`]. The application depends on
//! this trait, while adapters (CSV, JSON, YAML) provide the implementation.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::problem::DecisionProblem;

/// Port for reading decision problems from an input stream.
///
/// # Contract
///
/// Implementations must:
/// - Produce a problem whose shape is consistent (one row per alternative,
///   one value per criterion)
/// - Leave value positivity to evaluation, so drafts with blanks can be loaded
/// - Report clear errors for unreadable or structurally invalid input
///
/// # Usage
///
/// ```rust,ignore
/// let reader: &dyn ProblemReader = &CsvProblemReader::new();
/// let problem = reader.read_problem(&mut File::open("plants.csv")?)?;
/// ```
pub trait ProblemReader: Send + Sync {
    /// Read a problem from the given input.
    ///
    /// # Errors
    ///
    /// Returns `ImportError` if the input cannot be parsed into a problem.
    fn read_problem(&self, input: &mut dyn Read) -> Result<DecisionProblem, ImportError>;
}

/// Input formats supported for import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportFormat {
    Csv,
    Json,
    Yaml,
}

impl ImportFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(ImportFormat::Csv),
            "json" => Ok(ImportFormat::Json),
            "yaml" | "yml" => Ok(ImportFormat::Yaml),
            _ => Err(ImportError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Errors that can occur while importing a problem.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Input is empty or has no data rows")]
    Empty,

    #[error("Header must name the alternative column and at least one criterion")]
    MissingCriteria,

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse input: {0}")]
    Parse(String),

    #[error("Invalid problem: {0}")]
    Invalid(#[from] ValidationError),
}

impl From<ImportError> for DomainError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::Invalid(validation) => validation.into(),
            other => DomainError::new(ErrorCode::ImportFailed, other.to_string()),
        }
    }
}
