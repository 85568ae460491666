//! JSON and YAML problem readers.

use std::io::Read;

use tracing::debug;

use crate::domain::problem::DecisionProblem;
use crate::ports::{ImportError, ImportFormat, ProblemReader};

/// Reads the serde representation of a [`DecisionProblem`].
///
/// ```yaml
/// alternatives: [Plant A, Plant B]
/// criteria:
///   - { name: Capacity, type: beneficial }
///   - { name: Cost, type: cost }
/// values:
///   - [120, 45]
///   - [95, 38]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredProblemReader {
    format: ImportFormat,
}

impl StructuredProblemReader {
    /// Reader for JSON documents.
    pub fn json() -> Self {
        Self {
            format: ImportFormat::Json,
        }
    }

    /// Reader for YAML documents.
    pub fn yaml() -> Self {
        Self {
            format: ImportFormat::Yaml,
        }
    }
}

impl ProblemReader for StructuredProblemReader {
    fn read_problem(&self, input: &mut dyn Read) -> Result<DecisionProblem, ImportError> {
        let mut text = String::new();
        input.read_to_string(&mut text)?;

        if text.trim().is_empty() {
            return Err(ImportError::Empty);
        }

        let problem: DecisionProblem = match self.format {
            ImportFormat::Yaml => {
                serde_yaml::from_str(&text).map_err(|e| ImportError::Parse(e.to_string()))?
            }
            ImportFormat::Json => {
                serde_json::from_str(&text).map_err(|e| ImportError::Parse(e.to_string()))?
            }
            ImportFormat::Csv => return Err(ImportError::UnsupportedFormat("csv".to_string())),
        };

        debug!(
            format = ?self.format,
            alternatives = problem.alternative_count(),
            criteria = problem.criterion_count(),
            "Structured problem read"
        );

        Ok(problem)
    }
}
