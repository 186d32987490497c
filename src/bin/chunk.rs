//! Lambda entry point for the chunk transform.

use chunky::{chunk_handler, BatchState, ChunkResult, Chunker, RandomChunkProcessor};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    chunky::logging::init_tracing();

    let chunker = Chunker::default();
    let processor = RandomChunkProcessor::new();

    let chunker = &chunker;
    let processor = &processor;
    run(service_fn(move |event: LambdaEvent<BatchState>| async move {
        Ok::<ChunkResult, Error>(chunk_handler(event.payload, chunker, processor))
    }))
    .await
}
