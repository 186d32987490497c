//! Lambda entry point for the initiator.
//!
//! Invoke with `{"payload": [...]}`. The function starts one run of the
//! state machine named by `STATE_MACHINE_ARN` and returns nothing.

use chunky::{execute_chunker_handler, ChunkyConfig, ExecutorEvent, StepFunctionsClient};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    chunky::logging::init_tracing();

    // Built once per cold start and lent to every invocation
    let config = ChunkyConfig::from_env();
    let client = StepFunctionsClient::from_config(&config).await;

    let config = &config;
    let client = &client;
    run(service_fn(move |event: LambdaEvent<ExecutorEvent>| async move {
        execute_chunker_handler(event.payload, config, client)
            .await
            .map_err(Error::from)
    }))
    .await
}
