use thiserror::Error;

/// Error types that can occur while validating or evaluating a request.
#[derive(Debug, Error)]
pub enum EvalError {
    /// A required field is absent from the request body
    #[error("missing required field `{0}`")]
    MissingField(String),
    /// A field is present but has the wrong JSON type
    #[error("field `{field}` must be a {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },
    /// The request body could not be interpreted at all
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    Json(String),
    /// Errors returned by the evaluation collaborator
    #[error("Evaluator error: {0}")]
    Evaluator(String),
    /// Bind or serve failures
    #[error("Server error: {0}")]
    Server(String),
}

impl EvalError {
    /// Whether the error was caused by the caller's input rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EvalError::MissingField(_)
                | EvalError::InvalidField { .. }
                | EvalError::InvalidRequest(_)
                | EvalError::Json(_)
        )
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(err: serde_json::Error) -> Self {
        EvalError::Json(err.to_string())
    }
}
