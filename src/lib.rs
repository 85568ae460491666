//! MEREC-AROMAN - Multi-Criteria Decision Making Engine
//!
//! This crate ranks a set of alternatives against a set of criteria. Criterion
//! weights are derived objectively from the data with MEREC (Method based on
//! the Removal Effects of Criteria), and alternatives are ranked with AROMAN
//! (Alternative Ranking Order Method Accounting for two-step Normalization).
//!
//! # Example
//!
//! ```
//! use merec_aroman::domain::analysis::{AromanAnalyzer, DecisionMatrix, MerecCalculator};
//! use merec_aroman::domain::foundation::CriterionType;
//!
//! let matrix = DecisionMatrix::new(vec![
//!     vec![4.0, 3.0, 5.0],
//!     vec![2.0, 5.0, 3.0],
//!     vec![6.0, 1.0, 4.0],
//! ])
//! .unwrap();
//! let types = [CriterionType::Beneficial; 3];
//!
//! let weights = MerecCalculator::compute_weights(&matrix, &types).unwrap();
//! let ranking = AromanAnalyzer::rank(&matrix, &weights, &types).unwrap();
//! assert_eq!(ranking.len(), 3);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
