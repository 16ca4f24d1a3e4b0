use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::format::to_spaced_string;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Response envelope returned to the invoking runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// Serialized JSON payload.
    pub body: String,
}

impl FunctionResponse {
    /// Builds a JSON response, falling back to a 500 if the payload cannot be serialized.
    ///
    /// The body uses `", "` and `": "` separators.
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Self {
        match to_spaced_string(payload) {
            Ok(body) => Self::with_body(status_code, body),
            Err(err) => {
                log::error!("Failed to serialize response body: {err}");
                Self::error(500, "failed to serialize response")
            }
        }
    }

    /// Builds a JSON error response of the form `{"error": "<message>"}`.
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        let payload = json!({ "error": message.into() });
        let body = to_spaced_string(&payload).unwrap_or_else(|_| payload.to_string());
        Self::with_body(status_code, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    fn with_body(status_code: u16, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());
        Self {
            status_code,
            headers,
            body,
        }
    }
}
