use async_trait::async_trait;

use super::{Evaluator, TestCase};
use crate::error::EvalError;
use crate::evaluation::EvaluationResult;

/// Returns the placeholder scores for every test case, ignoring its content.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedScoreEvaluator;

#[async_trait]
impl Evaluator for FixedScoreEvaluator {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn evaluate(&self, case: &TestCase) -> Result<EvaluationResult, EvalError> {
        log::debug!(
            "Scoring {} chars of output (reference: {})",
            case.actual_output.len(),
            case.expected_output.is_some()
        );
        Ok(EvaluationResult::placeholder())
    }
}
