use serde::Serialize;
use serde_json::Value;

use crate::error::EvalError;

const RESPONSE_FIELD: &str = "response";
const REFERENCE_FIELD: &str = "reference";

/// A validated evaluation request.
///
/// Built from an untyped JSON body at the handler boundary so that handler
/// logic only ever sees a request whose required field is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationRequest {
    /// The generated text to evaluate.
    pub response: String,
    /// Optional reference text, empty when not supplied.
    pub reference: String,
}

impl EvaluationRequest {
    pub fn new(response: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            reference: reference.into(),
        }
    }

    /// Validates a decoded JSON body.
    ///
    /// `response` must be a string. `reference` may be absent or `null`, in
    /// which case it defaults to the empty string. Other keys are ignored.
    pub fn from_value(body: &Value) -> Result<Self, EvalError> {
        let object = body.as_object().ok_or_else(|| {
            EvalError::InvalidRequest(format!(
                "expected a JSON object, got {}",
                json_type_name(body)
            ))
        })?;

        let response = match object.get(RESPONSE_FIELD) {
            None | Some(Value::Null) => {
                return Err(EvalError::MissingField(RESPONSE_FIELD.to_string()))
            }
            Some(value) => string_field(RESPONSE_FIELD, value)?,
        };

        let reference = match object.get(REFERENCE_FIELD) {
            None | Some(Value::Null) => String::new(),
            Some(value) => string_field(REFERENCE_FIELD, value)?,
        };

        Ok(Self {
            response,
            reference,
        })
    }

    /// Returns the reference text, or `None` if it was omitted or empty.
    pub fn reference(&self) -> Option<&str> {
        if self.reference.is_empty() {
            None
        } else {
            Some(&self.reference)
        }
    }
}

fn string_field(field: &str, value: &Value) -> Result<String, EvalError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| EvalError::InvalidField {
            field: field.to_string(),
            expected: "string",
        })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reference_defaults_to_empty() {
        let req = EvaluationRequest::from_value(&json!({"response": "Paris"})).unwrap();
        assert_eq!(req, EvaluationRequest::new("Paris", ""));
        assert_eq!(req.reference(), None);
    }

    #[test]
    fn null_reference_is_treated_as_absent() {
        let req =
            EvaluationRequest::from_value(&json!({"response": "a", "reference": null})).unwrap();
        assert_eq!(req.reference, "");
    }

    #[test]
    fn keeps_reference_and_ignores_unknown_keys() {
        let req = EvaluationRequest::from_value(
            &json!({"response": "foo", "reference": "bar", "model": "gpt"}),
        )
        .unwrap();
        assert_eq!(req.response, "foo");
        assert_eq!(req.reference(), Some("bar"));
    }

    #[test]
    fn missing_response_is_rejected() {
        let err = EvaluationRequest::from_value(&json!({})).unwrap_err();
        assert!(matches!(err, EvalError::MissingField(ref f) if f == "response"));
        assert_eq!(err.to_string(), "missing required field `response`");
    }

    #[test]
    fn non_string_fields_are_rejected() {
        let err = EvaluationRequest::from_value(&json!({"response": 42})).unwrap_err();
        assert!(matches!(err, EvalError::InvalidField { ref field, .. } if field == "response"));

        let err =
            EvaluationRequest::from_value(&json!({"response": "x", "reference": ["y"]}))
                .unwrap_err();
        assert_eq!(err.to_string(), "field `reference` must be a string");
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = EvaluationRequest::from_value(&json!(["response"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid request: expected a JSON object, got array"
        );
    }
}
