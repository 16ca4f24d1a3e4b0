use axum::{extract::State, http::StatusCode, Json};

use crate::api::types::HealthResponse;
use crate::api::ServerState;

pub async fn handle_health(
    State(state): State<ServerState>,
) -> (StatusCode, Json<HealthResponse>) {
    let evaluator = state.evaluator.name().to_string();
    match state.evaluator.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                evaluator,
                error: None,
            }),
        ),
        Err(err) => {
            log::warn!("Health check failed for {evaluator}: {err}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_string(),
                    evaluator,
                    error: Some(err.to_string()),
                }),
            )
        }
    }
}
