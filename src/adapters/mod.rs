//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external formats:
//! - `import` - Problem readers (CSV, JSON, YAML)
//! - `export` - Report exporters (markdown table, JSON)

pub mod export;
pub mod import;

pub use export::{exporter_for, JsonReportExporter, TableReportExporter};
pub use import::{CsvProblemReader, StructuredProblemReader};

use crate::ports::{ImportFormat, ProblemReader};

/// Builds the reader for an input format.
///
/// `cost_criteria` only applies to CSV, where criterion types are not part of
/// the input.
pub fn reader_for(format: ImportFormat, cost_criteria: &[String]) -> Box<dyn ProblemReader> {
    match format {
        ImportFormat::Csv => {
            Box::new(CsvProblemReader::new().with_cost_criteria(cost_criteria.iter().cloned()))
        }
        ImportFormat::Json => Box::new(StructuredProblemReader::json()),
        ImportFormat::Yaml => Box::new(StructuredProblemReader::yaml()),
    }
}
