//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! decision domain.

mod criterion_type;
mod errors;

pub use criterion_type::CriterionType;
pub use errors::{DomainError, ErrorCode, ValidationError};
