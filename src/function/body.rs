use serde_json::Value;

use crate::error::EvalError;

/// Access to the decoded JSON body of an invocation.
pub trait JsonBody {
    fn json_body(&self) -> Result<Value, EvalError>;
}

impl JsonBody for Value {
    fn json_body(&self) -> Result<Value, EvalError> {
        Ok(self.clone())
    }
}

impl JsonBody for str {
    fn json_body(&self) -> Result<Value, EvalError> {
        if self.trim().is_empty() {
            return Err(EvalError::InvalidRequest("request body is empty".into()));
        }
        Ok(serde_json::from_str(self)?)
    }
}

impl JsonBody for String {
    fn json_body(&self) -> Result<Value, EvalError> {
        self.as_str().json_body()
    }
}
