//! MEREC Calculator - Objective criteria weights from removal effects.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::foundation::{CriterionType, ValidationError};

use super::{DecisionMatrix, Normalizer, WeightVector};

/// Smallest normalized value allowed to reach the logarithm.
///
/// Min-max normalization maps the worst alternative of every column to 0, and
/// `ln(0)` is undefined. Values `<= 0` are raised to this floor. This is a
/// deliberate smoothing epsilon: it changes the magnitude of removal effects
/// for worst-in-column entries and nothing else.
pub const MEREC_LOG_FLOOR: f64 = 0.001;

/// MEREC needs at least two criteria to remove one.
pub const MEREC_MIN_CRITERIA: usize = 2;

/// Intermediate values of a MEREC run, kept for inspection and reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerecAnalysis {
    /// Type-aware min-max normalized matrix, floored at `MEREC_LOG_FLOOR`.
    pub normalized: Vec<Vec<f64>>,
    /// `S_i` for every alternative.
    pub overall_performance: Vec<f64>,
    /// `E_j` for every criterion.
    pub removal_effects: Vec<f64>,
    /// Final criteria weights.
    pub weights: WeightVector,
    /// True when the removal effects could not discriminate and `1/n` was used.
    pub uniform_fallback: bool,
}

/// MEREC (MEthod based on the Removal Effects of Criteria) weighting.
pub struct MerecCalculator;

impl MerecCalculator {
    /// Computes one weight per criterion.
    ///
    /// # Errors
    /// - `TooFewCriteria` if the matrix has fewer than two criteria
    /// - `LengthMismatch` if `criteria_types` does not have one entry per criterion
    pub fn compute_weights(
        matrix: &DecisionMatrix,
        criteria_types: &[CriterionType],
    ) -> Result<WeightVector, ValidationError> {
        Self::analyze(matrix, criteria_types).map(|analysis| analysis.weights)
    }

    /// Runs the full MEREC procedure and returns every intermediate step.
    ///
    /// # Algorithm
    /// 1. `x'_ij` = type-aware min-max normalization, floored at `MEREC_LOG_FLOOR`
    /// 2. `S_i = ln(1 + (1/n) * Σ_j ln(x'_ij))`
    /// 3. `S_i^(j) = ln(1 + (1/(n-1)) * Σ_{k≠j} ln(x'_ik))`
    /// 4. `E_j = Σ_i |S_i - S_i^(j)|`
    /// 5. `w_j = E_j / Σ_k E_k`, or `1/n` for every criterion when the total is
    ///    zero or undefined
    ///
    /// The inner sum uses `ln(x')` rather than `|ln(x')|`. Since `x' <= 1` the
    /// argument `1 + mean` drops to zero or below whenever an alternative is
    /// worst on enough criteria, which makes `S_i` undefined. That propagates to
    /// a non-finite total removal effect and therefore to the uniform fallback,
    /// which keeps weights compatible with previously computed results.
    ///
    /// # Panics
    /// Panics if a normalized value reaching the logarithm is not positive.
    /// The floor in step 1 rules this out, so a panic here is a defect.
    pub fn analyze(
        matrix: &DecisionMatrix,
        criteria_types: &[CriterionType],
    ) -> Result<MerecAnalysis, ValidationError> {
        let n = matrix.criterion_count();
        if n < MEREC_MIN_CRITERIA {
            return Err(ValidationError::TooFewCriteria {
                required: MEREC_MIN_CRITERIA,
                actual: n,
            });
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

        let normalized = Self::normalize(matrix, criteria_types);
        let overall_performance: Vec<f64> = normalized
            .iter()
            .map(|row| Self::performance(row, None))
            .collect();
        let removal_effects = Self::removal_effects(&normalized, &overall_performance);

        let total: f64 = removal_effects.iter().sum();
        let uniform_fallback = !(total.is_finite() && total > 0.0);
        let weights = if uniform_fallback {
            if total.is_finite() {
                debug!(criteria = n, "No criterion has a removal effect; using uniform weights");
            } else {
                warn!(
                    criteria = n,
                    "Removal effects are undefined for this matrix; using uniform weights"
                );
            }
            WeightVector::uniform(n)
        } else {
            WeightVector::from_computed(removal_effects.iter().map(|e| e / total).collect())
        };

        debug!(
            alternatives = matrix.alternative_count(),
            criteria = n,
            uniform_fallback,
            "Computed MEREC weights"
        );

        Ok(MerecAnalysis {
            normalized,
            overall_performance,
            removal_effects,
            weights,
            uniform_fallback,
        })
    }

    /// Type-aware min-max normalization with the logarithm floor applied.
    pub fn normalize(matrix: &DecisionMatrix, criteria_types: &[CriterionType]) -> Vec<Vec<f64>> {
        let mut normalized = Normalizer::min_max(matrix, Some(criteria_types));
        for value in normalized.iter_mut().flatten() {
            if *value <= 0.0 {
                *value = MEREC_LOG_FLOOR;
            }
        }
        normalized
    }

    /// `E_j` for every criterion given the floored matrix and `S_i`.
    fn removal_effects(normalized: &[Vec<f64>], overall_performance: &[f64]) -> Vec<f64> {
        let n = normalized.first().map(Vec::len).unwrap_or(0);
        (0..n)
            .map(|j| {
                normalized
                    .iter()
                    .zip(overall_performance)
                    .map(|(row, &s)| (s - Self::performance(row, Some(j))).abs())
                    .sum()
            })
            .collect()
    }

    /// `ln(1 + mean of ln(x'))` over a row, optionally excluding one criterion.
    fn performance(row: &[f64], removed: Option<usize>) -> f64 {
        let mut sum = 0.0;
        let mut count = 0usize;
        for (k, &value) in row.iter().enumerate() {
            if Some(k) == removed {
                continue;
            }
            assert!(
                value > 0.0,
                "MEREC invariant violated: normalized value {} at criterion {} reached the logarithm",
                value,
                k
            );
            sum += value.ln();
            count += 1;
        }
        (1.0 + sum / count as f64).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn matrix(rows: Vec<Vec<f64>>) -> DecisionMatrix {
        DecisionMatrix::new(rows).unwrap()
    }

    fn beneficial(n: usize) -> Vec<CriterionType> {
        vec![CriterionType::Beneficial; n]
    }

    fn scenario() -> DecisionMatrix {
        matrix(vec![
            vec![4.0, 3.0, 5.0],
            vec![2.0, 5.0, 3.0],
            vec![6.0, 1.0, 4.0],
        ])
    }

    #[test]
    fn single_criterion_fails_fast() {
        let m = matrix(vec![vec![1.0], vec![2.0]]);
        let result = MerecCalculator::compute_weights(&m, &beneficial(1));
        assert_eq!(
            result,
            Err(ValidationError::TooFewCriteria {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn criteria_type_length_must_match() {
        let result = MerecCalculator::compute_weights(&scenario(), &beneficial(2));
        assert!(matches!(
            result,
            Err(ValidationError::LengthMismatch { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn scenario_weights_are_positive_and_sum_to_one() {
        let weights = MerecCalculator::compute_weights(&scenario(), &beneficial(3)).unwrap();
        assert_eq!(weights.len(), 3);
        assert!(weights.values().iter().all(|&w| w > 0.0));
        assert_relative_eq!(weights.sum(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn scenario_falls_back_to_uniform_when_performance_is_undefined() {
        // The second alternative is worst on two of three criteria, so 1 + mean(ln x') < 0.
        let analysis = MerecCalculator::analyze(&scenario(), &beneficial(3)).unwrap();
        assert!(analysis.overall_performance[1].is_nan());
        assert!(analysis.uniform_fallback);
        assert!(analysis.weights.values().iter().all(|&w| w == 1.0 / 3.0));
    }

    #[test]
    fn floor_replaces_zero_before_logarithm() {
        let normalized = MerecCalculator::normalize(&scenario(), &beneficial(3));
        assert_eq!(normalized[1][0], MEREC_LOG_FLOOR);
        assert_eq!(normalized[2][1], MEREC_LOG_FLOOR);
        assert_eq!(normalized[0][2], 1.0);
        assert!(normalized.iter().flatten().all(|&v| v > 0.0));
    }

    #[test]
    fn cost_criterion_reverses_normalization() {
        let m = matrix(vec![vec![2.0, 2.0], vec![6.0, 6.0], vec![4.0, 4.0]]);
        let types = [CriterionType::Beneficial, CriterionType::Cost];
        let normalized = MerecCalculator::normalize(&m, &types);
        // Largest raw value: best for beneficial, floored for cost.
        assert_eq!(normalized[1][0], 1.0);
        assert_eq!(normalized[1][1], MEREC_LOG_FLOOR);
        // Same mid-range position scores the same either way.
        assert_eq!(normalized[2][0], 0.5);
        assert_eq!(normalized[2][1], 0.5);
        assert!(normalized[1][1] < normalized[1][0]);
    }

    #[test]
    fn discriminating_matrix_produces_removal_effect_weights() {
        let m = matrix(vec![
            vec![2.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0],
            vec![1.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0],
            vec![3.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0],
        ]);
        let analysis = MerecCalculator::analyze(&m, &beneficial(8)).unwrap();

        assert!(!analysis.uniform_fallback);
        assert_relative_eq!(analysis.weights.sum(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.weights.values()[0], 0.112268, epsilon = 1e-6);
        for j in 1..8 {
            assert_relative_eq!(analysis.weights.values()[j], 0.126819, epsilon = 1e-6);
        }
    }

    #[test]
    fn constant_matrix_falls_back_to_uniform() {
        let m = matrix(vec![vec![2.0, 5.0], vec![2.0, 5.0]]);
        let analysis = MerecCalculator::analyze(&m, &beneficial(2)).unwrap();

        assert!(analysis.normalized.iter().flatten().all(|&v| v == 1.0));
        assert_eq!(analysis.removal_effects, vec![0.0, 0.0]);
        assert!(analysis.uniform_fallback);
        assert_eq!(analysis.weights.values(), &[0.5, 0.5]);
    }

    #[test]
    fn degenerate_column_produces_no_nan_weights() {
        let m = matrix(vec![vec![3.0, 1.0], vec![3.0, 2.0]]);
        let weights = MerecCalculator::compute_weights(&m, &beneficial(2)).unwrap();
        assert!(weights.values().iter().all(|w| w.is_finite() && *w >= 0.0));
        assert_relative_eq!(weights.sum(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_columns_are_logged() {
        let m = matrix(vec![vec![3.0, 1.0], vec![3.0, 2.0]]);
        let logs = crate::domain::analysis::capture::logs_of(|| {
            MerecCalculator::compute_weights(&m, &beneficial(2)).unwrap();
        });
        assert!(logs.contains("Constant criteria normalized to 1"), "{}", logs);
        assert!(logs.contains("columns=[0]"), "{}", logs);
    }

    #[test]
    fn varying_columns_are_not_reported_as_constant() {
        let logs = crate::domain::analysis::capture::logs_of(|| {
            MerecCalculator::compute_weights(&scenario(), &beneficial(3)).unwrap();
        });
        assert!(!logs.contains("Constant criteria"), "{}", logs);
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let m = scenario();
        let first = MerecCalculator::analyze(&m, &beneficial(3)).unwrap();
        let second = MerecCalculator::analyze(&m, &beneficial(3)).unwrap();
        let bits = |w: &WeightVector| w.values().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first.weights), bits(&second.weights));
    }
}
