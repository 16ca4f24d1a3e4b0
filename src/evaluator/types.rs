use serde::{Deserialize, Serialize};

use crate::evaluation::EvaluationRequest;

/// Input handed to an [`Evaluator`](super::Evaluator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// The generated text being scored.
    pub actual_output: String,
    /// Reference text the output is compared against, if any.
    pub expected_output: Option<String>,
    /// Additional retrieval or prompt context.
    #[serde(default)]
    pub context: Vec<String>,
}

impl TestCase {
    pub fn new(actual_output: impl Into<String>) -> Self {
        Self {
            actual_output: actual_output.into(),
            ..Self::default()
        }
    }

    pub fn expected_output(mut self, expected: impl Into<String>) -> Self {
        self.expected_output = Some(expected.into());
        self
    }
}

impl From<&EvaluationRequest> for TestCase {
    fn from(req: &EvaluationRequest) -> Self {
        Self {
            actual_output: req.response.clone(),
            expected_output: req.reference().map(str::to_string),
            context: Vec::new(),
        }
    }
}
