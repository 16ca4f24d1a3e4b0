use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub evaluator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
