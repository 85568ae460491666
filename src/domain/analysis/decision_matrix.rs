//! Decision Matrix - Validated alternatives x criteria performance values.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// An `m x n` matrix of strictly positive performance values.
///
/// Rows are alternatives, columns are criteria. A `DecisionMatrix` can only be
/// obtained through validation, so every instance satisfies:
/// - at least one alternative and one criterion
/// - all rows have the same length
/// - every entry is finite and greater than zero
///
/// The matrix is immutable once built. Engines read from it and build their
/// own intermediate matrices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
    criterion_count: usize,
}

impl DecisionMatrix {
    /// Validates raw rows into a decision matrix.
    ///
    /// # Errors
    /// - `EmptyMatrix` if there are no rows or the first row is empty
    /// - `RaggedRow` if any row differs in length from the first
    /// - `NonFiniteEntry` for NaN or infinite values
    /// - `NonPositiveEntry` for values `<= 0`
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        let criterion_count = rows.first().map(Vec::len).unwrap_or(0);
        if criterion_count == 0 {
            return Err(ValidationError::EmptyMatrix);
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != criterion_count {
                return Err(ValidationError::RaggedRow {
                    row: i,
                    expected: criterion_count,
                    actual: row.len(),
                });
            }

            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(ValidationError::NonFiniteEntry { row: i, column: j });
                }
                if value <= 0.0 {
                    return Err(ValidationError::NonPositiveEntry {
                        row: i,
                        column: j,
                        value,
                    });
                }
            }
        }

        Ok(Self {
            rows,
            criterion_count,
        })
    }

    /// Creates a builder for constructing a decision matrix row by row.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Returns the number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.criterion_count
    }

    /// Returns the value for alternative `i` on criterion `j`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    /// Returns the performance values of one alternative.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    /// Returns the values of one criterion across all alternatives.
    pub fn column(&self, j: usize) -> Option<Vec<f64>> {
        if j >= self.criterion_count {
            return None;
        }
        Some(self.rows.iter().map(|row| row[j]).collect())
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the `(min, max)` of a column.
    pub(crate) fn column_range(&self, j: usize) -> (f64, f64) {
        self.rows.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), row| {
            (min.min(row[j]), max.max(row[j]))
        })
    }
}

impl<'de> Deserialize<'de> for DecisionMatrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            rows: Vec<Vec<f64>>,
        }

        let raw = Raw::deserialize(deserializer)?;
        DecisionMatrix::new(raw.rows).map_err(serde::de::Error::custom)
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an alternative's values.
    pub fn row(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.rows.push(values.into());
        self
    }

    /// Validates and builds the decision matrix.
    pub fn build(self) -> Result<DecisionMatrix, ValidationError> {
        DecisionMatrix::new(self.rows)
    }
}
