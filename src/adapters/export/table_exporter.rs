//! Markdown table report exporter.

use crate::domain::problem::EvaluationReport;
use crate::ports::{ExportError, ExportFormat, ReportExporter};

/// Default number of decimals for ranking values.
pub const DEFAULT_PRECISION: usize = 4;

/// Renders a report as two markdown tables: criterion weights and ranking.
///
/// Weights are shown as percentages with two decimals. Ranking sums and
/// scores use `precision` decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableReportExporter {
    precision: usize,
}

impl Default for TableReportExporter {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl TableReportExporter {
    /// Creates an exporter with the default precision.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of decimals for sums and scores.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    fn weights_section(&self, report: &EvaluationReport) -> String {
        let mut section = String::from("## MEREC Criteria Weights\n\n");
        section.push_str("| Criterion | Type | Weight |\n");
        section.push_str("|-----------|------|--------|\n");

        for criterion in &report.criteria {
            section.push_str(&format!(
                "| {} | {} | {:.2}% |\n",
                escape_cell(&criterion.name),
                criterion.criterion_type.label(),
                criterion.percentage()
            ));
        }
        section
    }

    fn ranking_section(&self, report: &EvaluationReport) -> String {
        let p = self.precision;
        let mut section = String::from("## AROMAN Ranking Results\n\n");
        section.push_str("| Rank | Alternative | Ki (Cost Sum) | Oi (Benefit Sum) | Score |\n");
        section.push_str("|------|-------------|---------------|------------------|-------|\n");

        for row in &report.rankings {
            section.push_str(&format!(
                "| {} | {} | {:.p$} | {:.p$} | {:.p$} |\n",
                row.rank,
                escape_cell(&row.name),
                row.cost_sum,
                row.benefit_sum,
                row.score,
                p = p
            ));
        }
        section
    }
}

impl ReportExporter for TableReportExporter {
    fn export(&self, report: &EvaluationReport) -> Result<String, ExportError> {
        let mut output = self.weights_section(report);
        output.push('\n');
        output.push_str(&self.ranking_section(report));
        Ok(output)
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Table
    }
}

/// Pipes would split a markdown cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
