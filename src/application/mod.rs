//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations. Reading input and rendering
//! output stay behind the ports; handlers only see domain types.

pub mod handlers;

pub use handlers::{EvaluateDecisionCommand, EvaluateDecisionHandler, EvaluateDecisionResult};
