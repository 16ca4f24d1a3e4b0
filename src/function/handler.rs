use super::body::JsonBody;
use super::response::FunctionResponse;
use crate::error::EvalError;
use crate::evaluation::{EvaluationRequest, EvaluationResult};
use crate::evaluator::{Evaluator, FixedScoreEvaluator, TestCase};

/// Handles one invocation.
///
/// Never fails: client errors become a 400 envelope and evaluator errors a
/// 500 envelope, both with an `{"error": ...}` body.
pub async fn handle<R>(request: &R, evaluator: &dyn Evaluator) -> FunctionResponse
where
    R: JsonBody + ?Sized,
{
    match evaluate(request, evaluator).await {
        Ok(result) => FunctionResponse::json(200, &result),
        Err(err) => {
            log::warn!("Evaluation request failed: {err}");
            let status = if err.is_client_error() { 400 } else { 500 };
            FunctionResponse::error(status, err.to_string())
        }
    }
}

/// Handles one invocation with the placeholder evaluator.
pub async fn handle_default<R>(request: &R) -> FunctionResponse
where
    R: JsonBody + ?Sized,
{
    handle(request, &FixedScoreEvaluator).await
}

async fn evaluate<R>(request: &R, evaluator: &dyn Evaluator) -> Result<EvaluationResult, EvalError>
where
    R: JsonBody + ?Sized,
{
    let body = request.json_body()?;
    let req = EvaluationRequest::from_value(&body)?;
    log::debug!("Evaluating response with {}", evaluator.name());
    evaluator.evaluate(&TestCase::from(&req)).await
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
