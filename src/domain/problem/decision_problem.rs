//! Decision Problem - Named alternatives and criteria with editable values.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::DecisionMatrix;
use crate::domain::foundation::{CriterionType, ValidationError};

/// A named evaluation dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    #[serde(rename = "type", default)]
    pub criterion_type: CriterionType,
}

impl Criterion {
    /// Creates a criterion.
    pub fn new(name: impl Into<String>, criterion_type: CriterionType) -> Self {
        Self {
            name: name.into(),
            criterion_type,
        }
    }

    /// Creates a beneficial criterion.
    pub fn beneficial(name: impl Into<String>) -> Self {
        Self::new(name, CriterionType::Beneficial)
    }

    /// Creates a cost criterion.
    pub fn cost(name: impl Into<String>) -> Self {
        Self::new(name, CriterionType::Cost)
    }
}

/// A decision problem as entered by a user.
///
/// Unlike [`DecisionMatrix`], the values here are a draft: they may still be
/// zero or negative while the problem is being edited. Positivity is enforced
/// when the problem is turned into a matrix for evaluation.
///
/// The shape is always consistent: one row per alternative, one value per
/// criterion in every row. Every editing operation validates its arguments
/// before changing anything, so a failed edit leaves the problem untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProblem")]
pub struct DecisionProblem {
    alternatives: Vec<String>,
    criteria: Vec<Criterion>,
    values: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct RawProblem {
    alternatives: Vec<String>,
    criteria: Vec<Criterion>,
    values: Vec<Vec<f64>>,
}

impl TryFrom<RawProblem> for DecisionProblem {
    type Error = ValidationError;

    fn try_from(raw: RawProblem) -> Result<Self, Self::Error> {
        DecisionProblem::new(raw.alternatives, raw.criteria, raw.values)
    }
}

impl DecisionProblem {
    /// Creates a problem from names, criteria and values.
    ///
    /// # Errors
    /// `LengthMismatch` if the number of rows differs from the number of
    /// alternatives, or any row differs from the number of criteria.
    pub fn new(
        alternatives: Vec<String>,
        criteria: Vec<Criterion>,
        values: Vec<Vec<f64>>,
    ) -> Result<Self, ValidationError> {
        if values.len() != alternatives.len() {
            return Err(ValidationError::length_mismatch(
                "values",
                alternatives.len(),
                values.len(),
            ));
        }
        if let Some(row) = values.iter().find(|row| row.len() != criteria.len()) {
            return Err(ValidationError::length_mismatch(
                "values row",
                criteria.len(),
                row.len(),
            ));
        }

        Ok(Self {
            alternatives,
            criteria,
            values,
        })
    }

    /// Creates an `m x n` problem with generated names, beneficial criteria and zero values.
    pub fn with_defaults(alternatives: usize, criteria: usize) -> Self {
        Self {
            alternatives: (1..=alternatives).map(|i| format!("Alternative {}", i)).collect(),
            criteria: (1..=criteria)
                .map(|j| Criterion::beneficial(format!("Criterion {}", j)))
                .collect(),
            values: vec![vec![0.0; criteria]; alternatives],
        }
    }

    /// Returns the alternative names.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Returns the criteria.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Returns the draft values.
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Returns the criterion types in column order.
    pub fn criterion_types(&self) -> Vec<CriterionType> {
        self.criteria.iter().map(|c| c.criterion_type).collect()
    }

    /// Validates the values into a decision matrix.
    ///
    /// # Errors
    /// Any [`DecisionMatrix::new`] error, e.g. `NonPositiveEntry` for a cell
    /// that was never filled in.
    pub fn decision_matrix(&self) -> Result<DecisionMatrix, ValidationError> {
        DecisionMatrix::new(self.values.clone())
    }

    /// Appends an alternative with all values set to zero.
    pub fn add_alternative(&mut self, name: impl Into<String>) {
        self.alternatives.push(name.into());
        self.values.push(vec![0.0; self.criteria.len()]);
    }

    /// Removes an alternative and its row.
    ///
    /// # Errors
    /// `IndexOutOfRange` for a bad index, `LastEntry` when only one alternative remains.
    pub fn remove_alternative(&mut self, index: usize) -> Result<(), ValidationError> {
        self.check_alternative(index)?;
        if self.alternatives.len() == 1 {
            return Err(ValidationError::last_entry("alternatives"));
        }
        self.alternatives.remove(index);
        self.values.remove(index);
        Ok(())
    }

    /// Appends a criterion with a zero value for every alternative.
    pub fn add_criterion(&mut self, name: impl Into<String>, criterion_type: CriterionType) {
        self.criteria.push(Criterion::new(name, criterion_type));
        for row in &mut self.values {
            row.push(0.0);
        }
    }

    /// Removes a criterion and its column.
    ///
    /// # Errors
    /// `IndexOutOfRange` for a bad index, `LastEntry` when only one criterion remains.
    pub fn remove_criterion(&mut self, index: usize) -> Result<(), ValidationError> {
        self.check_criterion(index)?;
        if self.criteria.len() == 1 {
            return Err(ValidationError::last_entry("criteria"));
        }
        self.criteria.remove(index);
        for row in &mut self.values {
            row.remove(index);
        }
        Ok(())
    }

    /// Sets the value of alternative `i` on criterion `j`.
    pub fn set_value(&mut self, i: usize, j: usize, value: f64) -> Result<(), ValidationError> {
        self.check_alternative(i)?;
        self.check_criterion(j)?;
        self.values[i][j] = value;
        Ok(())
    }

    /// Changes the direction of criterion `j`.
    pub fn set_criterion_type(
        &mut self,
        j: usize,
        criterion_type: CriterionType,
    ) -> Result<(), ValidationError> {
        self.check_criterion(j)?;
        self.criteria[j].criterion_type = criterion_type;
        Ok(())
    }

    /// Renames alternative `i`.
    pub fn rename_alternative(&mut self, i: usize, name: impl Into<String>) -> Result<(), ValidationError> {
        self.check_alternative(i)?;
        self.alternatives[i] = name.into();
        Ok(())
    }

    /// Renames criterion `j`.
    pub fn rename_criterion(&mut self, j: usize, name: impl Into<String>) -> Result<(), ValidationError> {
        self.check_criterion(j)?;
        self.criteria[j].name = name.into();
        Ok(())
    }

    fn check_alternative(&self, index: usize) -> Result<(), ValidationError> {
        if index >= self.alternatives.len() {
            return Err(ValidationError::index_out_of_range(
                "alternatives",
                index,
                self.alternatives.len(),
            ));
        }
        Ok(())
    }

    fn check_criterion(&self, index: usize) -> Result<(), ValidationError> {
        if index >= self.criteria.len() {
            return Err(ValidationError::index_out_of_range(
                "criteria",
                index,
                self.criteria.len(),
            ));
        }
        Ok(())
    }
}
