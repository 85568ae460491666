//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (criterion types, errors)
//! - `analysis` - Pure numeric services (normalization, MEREC weighting, AROMAN ranking)
//! - `problem` - Named, editable decision problems and evaluation reports

pub mod analysis;
pub mod foundation;
pub mod problem;
