//! Normalizer - Column-wise min-max and vector normalization.

use crate::domain::foundation::CriterionType;

use super::DecisionMatrix;

/// Column-wise normalization of a decision matrix.
///
/// Both forms return a fresh row-major `m x n` matrix and never touch the input.
pub struct Normalizer;

impl Normalizer {
    /// Min-max normalization per criterion.
    ///
    /// With `criteria_types`, beneficial columns use `(x - min) / (max - min)`
    /// and cost columns use `(max - x) / (max - min)`. Without types every
    /// column uses the beneficial form.
    ///
    /// A column with `max == min` has no discriminating power and normalizes
    /// to `1.0` everywhere.
    ///
    /// `criteria_types`, when given, must have one entry per column; callers
    /// validate this before normalizing.
    pub fn min_max(matrix: &DecisionMatrix, criteria_types: Option<&[CriterionType]>) -> Vec<Vec<f64>> {
        let n = matrix.criterion_count();
        let ranges: Vec<(f64, f64)> = (0..n).map(|j| matrix.column_range(j)).collect();

        matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(j, &x)| {
                        let (min, max) = ranges[j];
                        if max == min {
                            return 1.0;
                        }
                        let criterion_type = criteria_types
                            .map(|types| types[j])
                            .unwrap_or(CriterionType::Beneficial);
                        match criterion_type {
                            CriterionType::Beneficial => (x - min) / (max - min),
                            CriterionType::Cost => (max - x) / (max - min),
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Vector (Euclidean) normalization per criterion.
    ///
    /// Each entry is divided by the column norm `sqrt(sum of squares)`.
    /// A zero-norm column normalizes to `0.0`.
    pub fn vector(matrix: &DecisionMatrix) -> Vec<Vec<f64>> {
        let n = matrix.criterion_count();
        let norms: Vec<f64> = (0..n)
            .map(|j| {
                matrix
                    .rows()
                    .iter()
                    .map(|row| row[j] * row[j])
                    .sum::<f64>()
                    .sqrt()
            })
            .collect();

        matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&norms)
                    .map(|(&x, &norm)| if norm > 0.0 { x / norm } else { 0.0 })
                    .collect()
            })
            .collect()
    }

    /// Returns the indices of columns with no variance.
    pub fn degenerate_columns(matrix: &DecisionMatrix) -> Vec<usize> {
        (0..matrix.criterion_count())
            .filter(|&j| {
                let (min, max) = matrix.column_range(j);
                max == min
            })
            .collect()
    }
}
