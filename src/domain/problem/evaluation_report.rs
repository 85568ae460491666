//! Evaluation Report - Named weights and ranking for presentation.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{RankedResult, WeightVector};
use crate::domain::foundation::CriterionType;

use super::DecisionProblem;

/// Weight assigned to a criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeight {
    pub name: String,
    pub criterion_type: CriterionType,
    pub weight: f64,
}

impl CriterionWeight {
    /// Returns the weight on a 0-100 scale.
    pub fn percentage(&self) -> f64 {
        self.weight * 100.0
    }
}

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub alternative_index: usize,
    pub name: String,
    pub cost_sum: f64,
    pub benefit_sum: f64,
    pub score: f64,
}

/// Outcome of evaluating a decision problem.
///
/// Built fresh on every evaluation and never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub criteria: Vec<CriterionWeight>,
    pub rankings: Vec<RankedAlternative>,
}

impl EvaluationReport {
    /// Attaches names from the problem to computed weights and results.
    ///
    /// `weights` must have one entry per criterion and `results` must index
    /// alternatives of `problem`; both hold when they were computed from it.
    pub fn from_results(
        problem: &DecisionProblem,
        weights: &WeightVector,
        results: &[RankedResult],
    ) -> Self {
        let criteria = problem
            .criteria()
            .iter()
            .zip(weights.values())
            .map(|(criterion, &weight)| CriterionWeight {
                name: criterion.name.clone(),
                criterion_type: criterion.criterion_type,
                weight,
            })
            .collect();

        let rankings = results
            .iter()
            .enumerate()
            .map(|(position, result)| RankedAlternative {
                rank: position + 1,
                alternative_index: result.alternative_index,
                name: problem.alternatives()[result.alternative_index].clone(),
                cost_sum: result.cost_sum,
                benefit_sum: result.benefit_sum,
                score: result.score,
            })
            .collect();

        Self { criteria, rankings }
    }

    /// Returns the top-ranked alternative.
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.rankings.first()
    }

    /// Returns the weights in criterion order.
    pub fn weights(&self) -> Vec<f64> {
        self.criteria.iter().map(|c| c.weight).collect()
    }
}
