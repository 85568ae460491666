//! Evaluation command handlers.

mod evaluate_decision;

pub use evaluate_decision::{
    EvaluateDecisionCommand, EvaluateDecisionHandler, EvaluateDecisionResult,
};
