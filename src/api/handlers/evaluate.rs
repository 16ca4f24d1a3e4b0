use axum::{extract::State, Json};
use serde_json::Value;

use super::helpers::{eval_error, ApiResult};
use crate::api::ServerState;
use crate::evaluation::{EvaluationRequest, EvaluationResult};
use crate::evaluator::TestCase;

pub async fn handle_evaluate(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<EvaluationResult>> {
    let req = EvaluationRequest::from_value(&body).map_err(eval_error)?;
    log::debug!(
        "POST /evaluate: {} chars, reference: {}",
        req.response.len(),
        req.reference().is_some()
    );

    let result = state
        .evaluator
        .evaluate(&TestCase::from(&req))
        .await
        .map_err(eval_error)?;

    Ok(Json(result))
}
