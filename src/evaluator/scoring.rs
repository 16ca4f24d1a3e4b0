use async_trait::async_trait;

use super::{Evaluator, TestCase};
use crate::error::EvalError;
use crate::evaluation::{
    EvaluationResult, PLACEHOLDER_FACTUALITY_SCORE, PLACEHOLDER_RELEVANCE_SCORE,
};

/// Function scoring one aspect of a test case.
pub type ScoringFn = dyn Fn(&TestCase) -> f64 + Send + Sync;

/// Evaluator backed by plain scoring functions.
///
/// Each metric is the sum of its registered functions. A metric with no
/// function registered keeps its placeholder score.
pub struct FnEvaluator {
    name: String,
    factuality_fns: Vec<Box<ScoringFn>>,
    relevance_fns: Vec<Box<ScoringFn>>,
}

impl FnEvaluator {
    /// Creates a new evaluator with no scoring functions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            factuality_fns: Vec::new(),
            relevance_fns: Vec::new(),
        }
    }

    /// Adds a function contributing to the factuality score.
    pub fn factuality<F>(mut self, f: F) -> Self
    where
        F: Fn(&TestCase) -> f64 + Send + Sync + 'static,
    {
        self.factuality_fns.push(Box::new(f));
        self
    }

    /// Adds a function contributing to the relevance score.
    pub fn relevance<F>(mut self, f: F) -> Self
    where
        F: Fn(&TestCase) -> f64 + Send + Sync + 'static,
    {
        self.relevance_fns.push(Box::new(f));
        self
    }

    fn compute(fns: &[Box<ScoringFn>], case: &TestCase, fallback: f64) -> f64 {
        if fns.is_empty() {
            return fallback;
        }
        fns.iter().map(|f| f(case)).sum()
    }
}

#[async_trait]
impl Evaluator for FnEvaluator {
    fn name(&self) -> &str {
        &self.name
    }

    async fn evaluate(&self, case: &TestCase) -> Result<EvaluationResult, EvalError> {
        let factuality = Self::compute(&self.factuality_fns, case, PLACEHOLDER_FACTUALITY_SCORE);
        let relevance = Self::compute(&self.relevance_fns, case, PLACEHOLDER_RELEVANCE_SCORE);
        if !factuality.is_finite() || !relevance.is_finite() {
            return Err(EvalError::Evaluator(format!(
                "{} produced a non-finite score",
                self.name
            )));
        }
        Ok(EvaluationResult::new(factuality, relevance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unset_metrics_keep_placeholders() {
        let evaluator = FnEvaluator::new("empty");
        let result = evaluator.evaluate(&TestCase::new("x")).await.unwrap();
        assert_eq!(result, EvaluationResult::placeholder());
    }

    #[tokio::test]
    async fn scoring_functions_are_summed() {
        let evaluator = FnEvaluator::new("length")
            .factuality(|case| case.actual_output.len() as f64)
            .factuality(|_| 1.0)
            .relevance(|case| if case.expected_output.is_some() { 50.0 } else { 0.0 });

        let result = evaluator
            .evaluate(&TestCase::new("abcd").expected_output("ref"))
            .await
            .unwrap();
        assert_eq!(result, EvaluationResult::new(5.0, 50.0));
        assert_eq!(evaluator.name(), "length");
    }

    #[tokio::test]
    async fn non_finite_scores_are_errors() {
        let evaluator = FnEvaluator::new("broken").relevance(|_| f64::NAN);
        let err = evaluator.evaluate(&TestCase::new("x")).await.unwrap_err();
        assert!(matches!(err, EvalError::Evaluator(_)));
        assert!(!err.is_client_error());
    }
}
