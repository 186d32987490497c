//! Lambda entry point for the failed chunk handler.

use chunky::{failed_chunk_handler, BatchState, ChunkResult};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    chunky::logging::init_tracing();

    run(service_fn(|event: LambdaEvent<ChunkResult>| async move {
        Ok::<BatchState, Error>(failed_chunk_handler(event.payload))
    }))
    .await
}
