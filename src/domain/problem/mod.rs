//! Problem Module - Named decision problems and evaluation reports.
//!
//! A `DecisionProblem` carries what a user edits (names, criterion
//! directions, draft values). An `EvaluationReport` carries what a user reads
//! back (named weights and the ranked alternatives).

mod decision_problem;
mod evaluation_report;

pub use decision_problem::{Criterion, DecisionProblem};
pub use evaluation_report::{CriterionWeight, EvaluationReport, RankedAlternative};
