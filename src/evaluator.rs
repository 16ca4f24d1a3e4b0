//! The evaluation collaborator.
//!
//! Handlers never compute scores themselves; they hand a [`TestCase`] to an
//! [`Evaluator`]. [`FixedScoreEvaluator`] is the default and returns the
//! placeholder scores. Real metrics are supplied by implementing the trait,
//! or by wiring closures into a [`FnEvaluator`].

#[path = "evaluator/types.rs"]
mod types;

#[path = "evaluator/fixed.rs"]
mod fixed;

#[path = "evaluator/scoring.rs"]
mod scoring;

use async_trait::async_trait;

use crate::error::EvalError;
use crate::evaluation::EvaluationResult;

pub use fixed::FixedScoreEvaluator;
pub use scoring::{FnEvaluator, ScoringFn};
pub use types::TestCase;

/// Computes scores for a single test case.
#[async_trait]
pub trait Evaluator: Send + Sync {
    /// Short identifier used in logs and health output.
    fn name(&self) -> &str;

    /// Scores the actual output of a test case.
    async fn evaluate(&self, case: &TestCase) -> Result<EvaluationResult, EvalError>;

    /// Reports whether the evaluator is able to serve requests.
    async fn health_check(&self) -> Result<(), EvalError> {
        Ok(())
    }
}
