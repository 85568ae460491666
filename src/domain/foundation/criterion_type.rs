//! Criterion type value object (beneficial or cost).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Direction of preference for a criterion.
///
/// Beneficial criteria are "higher is better", cost criteria are
/// "lower is better".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionType {
    #[default]
    Beneficial,
    #[serde(alias = "non-beneficial")]
    Cost,
}

impl CriterionType {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            CriterionType::Beneficial => "Benefit",
            CriterionType::Cost => "Cost",
        }
    }

    /// Returns true if higher values are preferred.
    pub fn is_beneficial(&self) -> bool {
        matches!(self, CriterionType::Beneficial)
    }

    /// Returns true if lower values are preferred.
    pub fn is_cost(&self) -> bool {
        matches!(self, CriterionType::Cost)
    }
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionType::Beneficial => write!(f, "beneficial"),
            CriterionType::Cost => write!(f, "cost"),
        }
    }
}

impl FromStr for CriterionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beneficial" | "benefit" => Ok(CriterionType::Beneficial),
            "cost" | "non-beneficial" => Ok(CriterionType::Cost),
            "" => Err(ValidationError::empty_field("criterion_type")),
            _ => Err(ValidationError::UnknownCriterionType {
                value: s.to_string(),
            }),
        }
    }
}
