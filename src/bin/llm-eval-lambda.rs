use env_logger::Env;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use llm_eval::function::{handle_default, FunctionResponse, InvocationEvent};
use serde_json::Value;

async fn lambda_handler(event: LambdaEvent<Value>) -> Result<FunctionResponse, Error> {
    let response = match InvocationEvent::from_payload(event.payload) {
        Ok(invocation) => handle_default(&invocation).await,
        Err(err) => {
            log::warn!("Unreadable invocation payload: {err}");
            FunctionResponse::error(400, err.to_string())
        }
    };
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
    lambda_runtime::run(service_fn(lambda_handler)).await
}
