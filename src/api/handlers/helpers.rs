use axum::http::StatusCode;

use crate::error::EvalError;

pub type ApiResult<T> = Result<T, (StatusCode, String)>;

pub fn bad_request(msg: impl Into<String>) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, msg.into())
}

pub fn internal_error(msg: impl Into<String>) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, msg.into())
}

/// Maps an evaluation error onto a status code and plain-text message.
pub fn eval_error(err: EvalError) -> (StatusCode, String) {
    log::warn!("Rejected request: {err}");
    if err.is_client_error() {
        bad_request(err.to_string())
    } else {
        internal_error(err.to_string())
    }
}
