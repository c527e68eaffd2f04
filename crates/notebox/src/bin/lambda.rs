//! AWS Lambda entry point for API Gateway HTTP API integrations.

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

use notebox::{
    config::Config,
    lambda::handle_event,
    state::AppState,
    telemetry::{init_tracing, LogFormat},
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env();
    init_tracing(config.log_format.unwrap_or(LogFormat::Json));

    // Built once per execution environment, reused across invocations
    let state = AppState::new(&config).await?;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let state = state.clone();
        async move {
            let (payload, context) = event.into_parts();
            Ok::<Value, Error>(handle_event(state.notes.as_ref(), payload, &context.request_id).await)
        }
    }))
    .await
}
