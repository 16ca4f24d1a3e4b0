use serde::{Deserialize, Serialize};

/// Placeholder factuality score returned until a real metric is injected.
pub const PLACEHOLDER_FACTUALITY_SCORE: f64 = 90.0;
/// Placeholder relevance score returned until a real metric is injected.
pub const PLACEHOLDER_RELEVANCE_SCORE: f64 = 80.0;

/// Scores produced for a single evaluated response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// How factually accurate the response is relative to the reference.
    pub factuality_score: f64,
    /// How relevant the response is to its prompt or context.
    pub relevance_score: f64,
}

impl EvaluationResult {
    pub fn new(factuality_score: f64, relevance_score: f64) -> Self {
        Self {
            factuality_score,
            relevance_score,
        }
    }

    /// The fixed placeholder scores.
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_FACTUALITY_SCORE, PLACEHOLDER_RELEVANCE_SCORE)
    }
}
