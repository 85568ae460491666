//! Report Exporter Port - Output interface for evaluation reports.
//!
//! This port defines the contract for rendering an [`EvaluationReport`] into a
//! textual format. The CLI depends on this trait, while adapters (markdown
//! table, JSON) provide the implementation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::problem::EvaluationReport;

/// Port for rendering evaluation reports.
///
/// # Contract
///
/// Implementations must:
/// - Preserve ranking order (rank 1 first)
/// - Render every criterion weight and every alternative
/// - Be deterministic for the same report
pub trait ReportExporter: Send + Sync {
    /// Render the report.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if rendering fails.
    fn export(&self, report: &EvaluationReport) -> Result<String, ExportError>;

    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;
}

/// Export formats supported for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Markdown tables.
    #[default]
    #[serde(alias = "markdown", alias = "md")]
    Table,
    /// JSON document.
    Json,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Table => "text/markdown; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Table => "md",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Table => write!(f, "table"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "markdown" | "md" => Ok(ExportFormat::Table),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<ExportError> for DomainError {
    fn from(err: ExportError) -> Self {
        DomainError::new(ErrorCode::ExportFailed, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parses_aliases() {
        assert_eq!("table".parse::<ExportFormat>().unwrap(), ExportFormat::Table);
        assert_eq!("MD".parse::<ExportFormat>().unwrap(), ExportFormat::Table);
        assert_eq!("markdown".parse::<ExportFormat>().unwrap(), ExportFormat::Table);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn format_display_round_trips() {
        for format in [ExportFormat::Table, ExportFormat::Json] {
            assert_eq!(format.to_string().parse::<ExportFormat>().unwrap(), format);
        }
    }

    #[test]
    fn format_metadata() {
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::Table.content_type(), "text/markdown; charset=utf-8");
    }

    #[test]
    fn format_deserializes_from_config_value() {
        let format: ExportFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, ExportFormat::Json);
    }

    #[test]
    fn format_deserializes_markdown_aliases() {
        for value in ["\"table\"", "\"markdown\"", "\"md\""] {
            let format: ExportFormat = serde_json::from_str(value).unwrap();
            assert_eq!(format, ExportFormat::Table);
        }
    }
}
