use axum::Json;
use serde_json::Value;

use super::helpers::{bad_request, ApiResult};
use crate::grading::{GradeRequest, GradeResult};

pub async fn handle_grade(Json(body): Json<Value>) -> ApiResult<Json<GradeResult>> {
    let req: GradeRequest =
        serde_json::from_value(body).map_err(|e| bad_request(e.to_string()))?;
    Ok(Json(req.grade()))
}
