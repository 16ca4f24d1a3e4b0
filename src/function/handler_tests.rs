use async_trait::async_trait;
use serde_json::{json, Value};

use super::*;
use crate::function::{InvocationEvent, CONTENT_TYPE_JSON};

struct FailingEvaluator;

#[async_trait]
impl Evaluator for FailingEvaluator {
    fn name(&self) -> &str {
        "failing"
    }

    async fn evaluate(&self, _case: &TestCase) -> Result<EvaluationResult, EvalError> {
        Err(EvalError::Evaluator("metric backend unreachable".into()))
    }
}

fn body_json(response: &FunctionResponse) -> Value {
    serde_json::from_str(&response.body).unwrap()
}

#[tokio::test]
async fn returns_envelope_with_fixed_scores() {
    let response = handle_default(&json!({"response": "x"})).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.headers.len(), 1);
    assert_eq!(response.headers["Content-Type"], CONTENT_TYPE_JSON);
    assert_eq!(
        body_json(&response),
        json!({"factuality_score": 90.0, "relevance_score": 80.0})
    );
}

#[tokio::test]
async fn reference_does_not_change_output() {
    let without = handle_default(&json!({"response": "foo"})).await;
    let with = handle_default(&json!({"response": "foo", "reference": "bar"})).await;
    assert_eq!(without, with);
}

#[tokio::test]
async fn accepts_raw_json_text() {
    let response = handle_default(r#"{"response": "Paris is the capital of France."}"#).await;
    assert!(response.is_success());
}

#[tokio::test]
async fn accepts_gateway_events() {
    let event = InvocationEvent::from_body(r#"{"response": "x", "reference": ""}"#);
    let response = handle_default(&event).await;
    assert_eq!(response.status_code, 200);
}

#[tokio::test]
async fn missing_response_is_a_bad_request() {
    let response = handle_default(&json!({})).await;
    assert_eq!(response.status_code, 400);
    assert_eq!(
        body_json(&response),
        json!({"error": "missing required field `response`"})
    );
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let response = handle_default("{not json").await;
    assert_eq!(response.status_code, 400);
    assert!(body_json(&response)["error"]
        .as_str()
        .unwrap()
        .starts_with("JSON parse error"));
}

#[tokio::test]
async fn evaluator_failure_is_a_server_error() {
    let response = handle(&json!({"response": "x"}), &FailingEvaluator).await;
    assert_eq!(response.status_code, 500);
    assert_eq!(
        body_json(&response),
        json!({"error": "Evaluator error: metric backend unreachable"})
    );
}
