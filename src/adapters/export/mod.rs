//! Export adapters - Implementations of the `ReportExporter` port.

mod json_exporter;
mod table_exporter;

pub use json_exporter::JsonReportExporter;
pub use table_exporter::{TableReportExporter, DEFAULT_PRECISION};

use crate::ports::{ExportFormat, ReportExporter};

/// Builds the exporter for a format.
pub fn exporter_for(format: ExportFormat, precision: usize, pretty_json: bool) -> Box<dyn ReportExporter> {
    match format {
        ExportFormat::Table => Box::new(TableReportExporter::new().with_precision(precision)),
        ExportFormat::Json => Box::new(JsonReportExporter::new(pretty_json)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exporter_matches_requested_format() {
        assert_eq!(exporter_for(ExportFormat::Table, 4, true).format(), ExportFormat::Table);
        assert_eq!(exporter_for(ExportFormat::Json, 4, false).format(), ExportFormat::Json);
    }
}
