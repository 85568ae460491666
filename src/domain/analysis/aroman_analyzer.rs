//! AROMAN Analyzer - Two-step normalization ranking of alternatives.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::{CriterionType, ValidationError};

use super::{DecisionMatrix, Normalizer, WeightVector};

/// Blend coefficient between linear and vector normalization.
pub const AROMAN_BETA: f64 = 0.5;

/// Exponent applied to the benefit and cost sums in the final score.
pub const AROMAN_LAMBDA: f64 = 0.5;

/// Score of one alternative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// Row of the alternative in the decision matrix.
    pub alternative_index: usize,
    /// `K_i`, weighted sum over cost criteria.
    pub cost_sum: f64,
    /// `O_i`, weighted sum over beneficial criteria.
    pub benefit_sum: f64,
    /// `exp(O_i^λ - K_i^λ)`.
    pub score: f64,
}

/// Intermediate matrices of an AROMAN run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AromanAnalysis {
    pub linear: Vec<Vec<f64>>,
    pub vector: Vec<Vec<f64>>,
    pub aggregated: Vec<Vec<f64>>,
    pub weighted: Vec<Vec<f64>>,
    /// Results sorted by descending score; rank 1 is the first element.
    pub results: Vec<RankedResult>,
}

/// AROMAN (Alternative Ranking Order Method Accounting for two-step Normalization).
pub struct AromanAnalyzer;

impl AromanAnalyzer {
    /// Ranks all alternatives, best first.
    ///
    /// # Errors
    /// `LengthMismatch` if `weights` or `criteria_types` do not have one entry
    /// per criterion.
    pub fn rank(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        criteria_types: &[CriterionType],
    ) -> Result<Vec<RankedResult>, ValidationError> {
        Self::analyze(matrix, weights, criteria_types).map(|analysis| analysis.results)
    }

    /// Runs the full AROMAN procedure and returns every intermediate matrix.
    ///
    /// # Algorithm
    /// 1. Linear normalization `(x - min) / (max - min)` on the raw matrix,
    ///    ignoring criterion type; constant columns become `1`
    /// 2. Vector normalization `x / ||column||` on the raw matrix
    /// 3. `agg = (β * linear + (1 - β) * vector) / 2` with `β = 0.5`
    /// 4. `weighted = w_j * agg`
    /// 5. `O_i` = sum over beneficial criteria, `K_i` = sum over cost criteria
    /// 6. `score = exp(max(0, O_i)^λ - max(0, K_i)^λ)` with `λ = 0.5`
    /// 7. Stable sort by descending score; ties keep matrix order
    ///
    /// Both normalizations read the raw matrix; they are not chained.
    pub fn analyze(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        criteria_types: &[CriterionType],
    ) -> Result<AromanAnalysis, ValidationError> {
        let n = matrix.criterion_count();
        if weights.len() != n {
            return Err(ValidationError::length_mismatch("weights", n, weights.len()));
        }
        if criteria_types.len() != n {
            return Err(ValidationError::length_mismatch(
                "criteria_types",
                n,
                criteria_types.len(),
            ));
        }

        let degenerate = Normalizer::degenerate_columns(matrix);
        if !degenerate.is_empty() {
            debug!(columns = ?degenerate, "Constant criteria normalized to 1");
        }

        let linear = Normalizer::min_max(matrix, None);
        let vector = Normalizer::vector(matrix);
        let aggregated = Self::aggregate(&linear, &vector);
        let weighted: Vec<Vec<f64>> = aggregated
            .iter()
            .map(|row| {
                row.iter()
                    .zip(weights.values())
                    .map(|(&a, &w)| w * a)
                    .collect()
            })
            .collect();

        let mut results: Vec<RankedResult> = weighted
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let (cost_sum, benefit_sum) = Self::partition_sums(row, criteria_types);
                RankedResult {
                    alternative_index: i,
                    cost_sum,
                    benefit_sum,
                    score: Self::score(benefit_sum, cost_sum),
                }
            })
            .collect();

        // sort_by is stable, so equal scores stay in ascending index order
        results.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(
            alternatives = matrix.alternative_count(),
            criteria = n,
            best = results.first().map(|r| r.alternative_index),
            "Computed AROMAN ranking"
        );

        Ok(AromanAnalysis {
            linear,
            vector,
            aggregated,
            weighted,
            results,
        })
    }

    /// Averaged aggregation of the two normalized matrices.
    ///
    /// NOTE: the extra division by 2 means the result is `(linear + vector) / 4`,
    /// half of the textbook AROMAN aggregation `(linear + vector) / 2`. Scores
    /// are kept on this scale for compatibility with existing computed results.
    fn aggregate(linear: &[Vec<f64>], vector: &[Vec<f64>]) -> Vec<Vec<f64>> {
        linear
            .iter()
            .zip(vector)
            .map(|(l_row, v_row)| {
                l_row
                    .iter()
                    .zip(v_row)
                    .map(|(&l, &v)| (AROMAN_BETA * l + (1.0 - AROMAN_BETA) * v) / 2.0)
                    .collect()
            })
            .collect()
    }

    /// Returns `(K_i, O_i)` for one weighted row.
    fn partition_sums(row: &[f64], criteria_types: &[CriterionType]) -> (f64, f64) {
        row.iter()
            .zip(criteria_types)
            .fold((0.0, 0.0), |(cost, benefit), (&value, criterion_type)| {
                match criterion_type {
                    CriterionType::Beneficial => (cost, benefit + value),
                    CriterionType::Cost => (cost + value, benefit),
                }
            })
    }

    /// Final score. Negative sums are clamped before the fractional power.
    fn score(benefit_sum: f64, cost_sum: f64) -> f64 {
        (benefit_sum.max(0.0).powf(AROMAN_LAMBDA) - cost_sum.max(0.0).powf(AROMAN_LAMBDA)).exp()
    }
}
