//! JSON report exporter.

use crate::domain::problem::EvaluationReport;
use crate::ports::{ExportError, ExportFormat, ReportExporter};

/// Serializes the report with `serde_json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonReportExporter {
    pretty: bool,
}

impl JsonReportExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportExporter for JsonReportExporter {
    fn export(&self, report: &EvaluationReport) -> Result<String, ExportError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        result.map_err(|e| ExportError::Serialization(e.to_string()))
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CriterionType;
    use crate::domain::problem::{CriterionWeight, RankedAlternative};

    fn report() -> EvaluationReport {
        EvaluationReport {
            criteria: vec![CriterionWeight {
                name: "Cost".into(),
                criterion_type: CriterionType::Cost,
                weight: 1.0,
            }],
            rankings: vec![RankedAlternative {
                rank: 1,
                alternative_index: 0,
                name: "Only".into(),
                cost_sum: 0.25,
                benefit_sum: 0.0,
                score: 0.6065,
            }],
        }
    }

    #[test]
    fn compact_output_is_single_line() {
        let output = JsonReportExporter::new(false).export(&report()).unwrap();
        assert!(!output.contains('\n'));
    }

    #[test]
    fn pretty_output_is_indented() {
        let output = JsonReportExporter::new(true).export(&report()).unwrap();
        assert!(output.contains("\n  \"criteria\""));
    }

    #[test]
    fn output_parses_back_to_report() {
        let output = JsonReportExporter::new(true).export(&report()).unwrap();
        let parsed: EvaluationReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, report());
    }
}
