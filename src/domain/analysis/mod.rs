//! Analysis Module - Pure numeric services for multi-criteria decision making.
//!
//! This module contains stateless functions that operate on a validated
//! decision matrix to derive criteria weights and rank alternatives.
//!
//! # Components
//!
//! - `DecisionMatrix` - Validated alternatives x criteria values
//! - `Normalizer` - Column-wise min-max and vector normalization
//! - `MerecCalculator` - Objective weights from removal effects (MEREC)
//! - `AromanAnalyzer` - Two-step normalization ranking (AROMAN)
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They borrow their
//! inputs read-only and return freshly built results, so repeated calls with
//! the same inputs return bit-identical outputs.

mod aroman_analyzer;
#[cfg(test)]
mod capture;
mod decision_matrix;
mod merec_calculator;
mod normalizer;
mod weight_vector;

// Re-export all public types
pub use aroman_analyzer::{AromanAnalysis, AromanAnalyzer, RankedResult, AROMAN_BETA, AROMAN_LAMBDA};
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use merec_calculator::{MerecAnalysis, MerecCalculator, MEREC_LOG_FLOOR, MEREC_MIN_CRITERIA};
pub use normalizer::Normalizer;
pub use weight_vector::{WeightVector, WEIGHT_SUM_TOLERANCE};
