use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::body::JsonBody;
use crate::error::EvalError;

/// An API-gateway style invocation event.
///
/// Only the fields needed to recover the JSON body are modelled; anything
/// else the gateway sends is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl InvocationEvent {
    pub fn from_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }

    /// Interprets a raw invocation payload.
    ///
    /// A payload is a gateway event when its `body` is a string or null and
    /// it either carries a gateway field or has no `response` of its own.
    /// Anything else is taken to be the JSON body itself.
    pub fn from_payload(payload: Value) -> Result<Self, EvalError> {
        if is_gateway_event(&payload) {
            return Ok(serde_json::from_value(payload)?);
        }
        Ok(Self::from_body(payload.to_string()))
    }

    fn decoded_body(&self) -> Result<String, EvalError> {
        let body = self
            .body
            .as_deref()
            .ok_or_else(|| EvalError::InvalidRequest("request body is empty".into()))?;
        if !self.is_base64_encoded {
            return Ok(body.to_string());
        }
        let bytes = STANDARD
            .decode(body)
            .map_err(|e| EvalError::InvalidRequest(format!("invalid base64 body: {e}")))?;
        String::from_utf8(bytes)
            .map_err(|e| EvalError::InvalidRequest(format!("body is not UTF-8: {e}")))
    }
}

const GATEWAY_FIELDS: [&str; 3] = ["isBase64Encoded", "httpMethod", "requestContext"];

fn is_gateway_event(payload: &Value) -> bool {
    let Some(object) = payload.as_object() else {
        return false;
    };
    let body_is_raw = matches!(object.get("body"), Some(Value::String(_) | Value::Null));
    body_is_raw
        && (GATEWAY_FIELDS.iter().any(|field| object.contains_key(*field))
            || !object.contains_key("response"))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

impl JsonBody for InvocationEvent {
    fn json_body(&self) -> Result<Value, EvalError> {
        self.decoded_body()?.json_body()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_gateway_event() {
        let event: InvocationEvent = serde_json::from_value(json!({
            "httpMethod": "POST",
            "headers": {"content-type": "application/json"},
            "body": "{\"response\": \"x\"}",
            "isBase64Encoded": false
        }))
        .unwrap();
        assert_eq!(event.json_body().unwrap(), json!({"response": "x"}));
        assert_eq!(event.headers["content-type"], "application/json");
    }

    #[test]
    fn bare_payload_is_the_body() {
        let event = InvocationEvent::from_payload(json!({"response": "x"})).unwrap();
        assert_eq!(event.json_body().unwrap(), json!({"response": "x"}));

        let event =
            InvocationEvent::from_payload(json!({"body": "{\"response\": \"z\"}"})).unwrap();
        assert_eq!(event.json_body().unwrap(), json!({"response": "z"}));
    }

    #[test]
    fn null_headers_are_empty() {
        let event = InvocationEvent::from_payload(json!({
            "httpMethod": "POST",
            "headers": null,
            "body": "{\"response\": \"x\"}",
            "isBase64Encoded": false
        }))
        .unwrap();
        assert!(event.headers.is_empty());
        assert_eq!(event.json_body().unwrap(), json!({"response": "x"}));
    }

    #[test]
    fn extra_body_field_on_a_direct_payload_is_ignored() {
        let payload = json!({"response": "x", "body": "some extra text"});
        let event = InvocationEvent::from_payload(payload.clone()).unwrap();
        assert_eq!(event.json_body().unwrap(), payload);

        let event = InvocationEvent::from_payload(json!({
            "response": "x",
            "body": "{\"response\": \"y\"}",
            "requestContext": {}
        }))
        .unwrap();
        assert_eq!(event.json_body().unwrap(), json!({"response": "y"}));
    }

    #[test]
    fn decodes_base64_body() {
        let event = InvocationEvent {
            body: Some(STANDARD.encode(r#"{"response": "y"}"#)),
            is_base64_encoded: true,
            ..InvocationEvent::default()
        };
        assert_eq!(event.json_body().unwrap(), json!({"response": "y"}));
    }

    #[test]
    fn rejects_missing_and_undecodable_bodies() {
        let err = InvocationEvent::default().json_body().unwrap_err();
        assert!(err.is_client_error());

        let event = InvocationEvent {
            body: Some("not base64!".into()),
            is_base64_encoded: true,
            ..InvocationEvent::default()
        };
        assert!(event
            .json_body()
            .unwrap_err()
            .to_string()
            .contains("invalid base64 body"));
    }
}
