#[path = "evaluation/request.rs"]
mod request;

#[path = "evaluation/result.rs"]
mod result;

pub use request::EvaluationRequest;
pub use result::{EvaluationResult, PLACEHOLDER_FACTUALITY_SCORE, PLACEHOLDER_RELEVANCE_SCORE};
