//! EvaluateDecisionHandler - Command handler for MEREC-AROMAN evaluation.

use tracing::{debug, info};

use crate::domain::analysis::{AromanAnalyzer, MerecCalculator, RankedResult, WeightVector};
use crate::domain::foundation::DomainError;
use crate::domain::problem::{DecisionProblem, EvaluationReport};

/// Command to evaluate a decision problem.
#[derive(Debug, Clone)]
pub struct EvaluateDecisionCommand {
    pub problem: DecisionProblem,
}

/// Result of a successful evaluation.
#[derive(Debug, Clone)]
pub struct EvaluateDecisionResult {
    pub report: EvaluationReport,
    pub weights: WeightVector,
    pub results: Vec<RankedResult>,
    /// True when MEREC could not separate the criteria and every weight is `1/n`.
    pub uniform_weights: bool,
}

/// Handler for evaluating decision problems.
///
/// Runs MEREC for the criterion weights and AROMAN for the ranking. Nothing is
/// produced unless the whole problem validates.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluateDecisionHandler;

impl EvaluateDecisionHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: EvaluateDecisionCommand) -> Result<EvaluateDecisionResult, DomainError> {
        let problem = cmd.problem;

        // 1. Validate values
        let matrix = problem.decision_matrix()?;
        let types = problem.criterion_types();

        // 2. Criterion weights
        let merec = MerecCalculator::analyze(&matrix, &types)?;

        // 3. Ranking
        let results = AromanAnalyzer::rank(&matrix, &merec.weights, &types)?;

        // 4. Attach names
        let report = EvaluationReport::from_results(&problem, &merec.weights, &results);

        debug!(
            weights = ?merec.weights.values(),
            uniform_weights = merec.uniform_fallback,
            "Evaluation weights"
        );
        if let Some(best) = report.best() {
            info!(
                alternatives = problem.alternative_count(),
                criteria = problem.criterion_count(),
                best = %best.name,
                score = best.score,
                "Decision evaluated"
            );
        }

        Ok(EvaluateDecisionResult {
            report,
            weights: merec.weights,
            results,
            uniform_weights: merec.uniform_fallback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CriterionType, ErrorCode};
    use crate::domain::problem::Criterion;

    fn scenario_problem() -> DecisionProblem {
        DecisionProblem::new(
            vec!["A1".into(), "A2".into(), "A3".into()],
            vec![
                Criterion::beneficial("C1"),
                Criterion::beneficial("C2"),
                Criterion::beneficial("C3"),
            ],
            vec![
                vec![4.0, 3.0, 5.0],
                vec![2.0, 5.0, 3.0],
                vec![6.0, 1.0, 4.0],
            ],
        )
        .unwrap()
    }

    fn handle(problem: DecisionProblem) -> Result<EvaluateDecisionResult, DomainError> {
        EvaluateDecisionHandler::new().handle(EvaluateDecisionCommand { problem })
    }

    #[test]
    fn scenario_produces_weights_and_full_ranking() {
        let result = handle(scenario_problem()).unwrap();

        assert_eq!(result.weights.len(), 3);
        assert!(result.weights.values().iter().all(|&w| w > 0.0));
        assert!((result.weights.sum() - 1.0).abs() < 1e-9);
        assert_eq!(result.report.rankings.len(), 3);
        assert_eq!(result.results.len(), 3);
    }

    #[test]
    fn scenario_falls_back_to_uniform_weights() {
        let result = handle(scenario_problem()).unwrap();
        assert!(result.uniform_weights);
        for w in result.weights.values() {
            assert!((w - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn report_ranks_are_consecutive_and_named() {
        let result = handle(scenario_problem()).unwrap();
        let ranks: Vec<_> = result.report.rankings.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(result.report.best().map(|b| b.name.as_str()), Some("A1"));
        assert_eq!(result.report.criteria[2].name, "C3");
    }

    #[test]
    fn report_matches_raw_results() {
        let result = handle(scenario_problem()).unwrap();
        for (row, raw) in result.report.rankings.iter().zip(&result.results) {
            assert_eq!(row.alternative_index, raw.alternative_index);
            assert_eq!(row.score, raw.score);
        }
    }

    #[test]
    fn non_positive_value_is_validation_failure() {
        let mut problem = scenario_problem();
        problem.set_value(1, 2, 0.0).unwrap();

        let err = handle(problem).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field").map(String::as_str), Some("matrix"));
    }

    #[test]
    fn single_criterion_is_validation_failure() {
        let problem = DecisionProblem::new(
            vec!["A".into(), "B".into()],
            vec![Criterion::beneficial("Only")],
            vec![vec![1.0], vec![2.0]],
        )
        .unwrap();

        let err = handle(problem).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field").map(String::as_str), Some("criteria"));
    }

    #[test]
    fn cost_criterion_changes_ranking() {
        let mut problem = scenario_problem();
        problem.set_criterion_type(1, CriterionType::Cost).unwrap();

        let result = handle(problem).unwrap();
        let order: Vec<_> = result.results.iter().map(|r| r.alternative_index).collect();
        assert_eq!(order, vec![2, 0, 1]);
        assert!(result.results.iter().any(|r| r.cost_sum > 0.0));
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        let first = handle(scenario_problem()).unwrap();
        let second = handle(scenario_problem()).unwrap();
        assert_eq!(first.report, second.report);
    }
}
