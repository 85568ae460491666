//! Weight vector value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Tolerance used when checking that externally supplied weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// One non-negative weight per criterion, summing to 1.0.
///
/// Produced by the MEREC calculator or validated from caller-supplied values.
/// Read-only after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Validates caller-supplied weights.
    ///
    /// # Errors
    /// - `EmptyField` if no weights are given
    /// - `InvalidWeight` for negative or non-finite values
    /// - `WeightSum` if the sum is not within `WEIGHT_SUM_TOLERANCE` of 1.0
    pub fn try_new(values: Vec<f64>) -> Result<Self, ValidationError> {
        if values.is_empty() {
            return Err(ValidationError::empty_field("weights"));
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(ValidationError::InvalidWeight { index, value });
        }

        let sum: f64 = values.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::WeightSum { sum });
        }

        Ok(Self(values))
    }

    /// Equal weight `1/n` for every criterion.
    pub fn uniform(n: usize) -> Self {
        Self(vec![1.0 / n as f64; n])
    }

    /// Wraps weights computed by a calculator that already guarantees the invariants.
    pub(crate) fn from_computed(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Returns the weights.
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Returns the weight of criterion `j`.
    pub fn get(&self, j: usize) -> Option<f64> {
        self.0.get(j).copied()
    }

    /// Returns the number of criteria.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no weights.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the sum of all weights.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Returns the weights on a 0-100 scale.
    pub fn as_percentages(&self) -> Vec<f64> {
        self.0.iter().map(|w| w * 100.0).collect()
    }
}

impl TryFrom<Vec<f64>> for WeightVector {
    type Error = ValidationError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_new(values)
    }
}

impl From<WeightVector> for Vec<f64> {
    fn from(weights: WeightVector) -> Self {
        weights.0
    }
}
