//! # Chunky
//!
//! Lambda handlers that walk a large record batch through an AWS Step
//! Functions state machine a few records at a time.
//!
//! ## Overview
//!
//! The crate provides three stateless handlers. The state machine that wires
//! them together lives outside this crate:
//!
//! ```text
//! START -> execute-chunker -> [chunk <-> failed-chunk]* -> END (recordsRemaining == 0)
//! ```
//!
//! - [`execute_chunker_handler`]: wraps the incoming records in a
//!   [`BatchState`] and starts a new run of the state machine.
//! - [`chunk_handler`]: takes the next [`DEFAULT_CHUNK_SIZE`] records,
//!   processes them, and returns a [`ChunkResult`] with the remainder.
//! - [`failed_chunk_handler`]: drops a failed chunk and returns the
//!   remainder so chunking can resume.
//!
//! ## Payloads
//!
//! The state machine routes on the JSON field names, which are fixed:
//! `payload`, `records`, `recordsRemaining`, `chunkProcessed` and
//! `chunkResponse`.
//!
//! ```rust
//! use chunky::{chunk_handler, BatchState, Chunker, FixedChunkProcessor};
//! use serde_json::json;
//!
//! let records = (1..=12).map(|i| json!(i)).collect();
//! let result = chunk_handler(
//!     BatchState::new(records),
//!     &Chunker::default(),
//!     &FixedChunkProcessor::succeeding(),
//! );
//!
//! assert_eq!(result.chunk_processed.len(), 5);
//! assert_eq!(result.records_remaining, 7);
//! ```
//!
//! ## Configuration
//!
//! [`ChunkyConfig::from_env`] reads `REGION` (default `us-west-2`),
//! `STATE_MACHINE_ARN` (needed only by the initiator) and
//! `EXECUTION_NAME_PREFIX` (default `chunky`).

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod naming;
pub mod processor;
pub mod types;

pub use client::{OrchestratorClient, SharedOrchestratorClient, StepFunctionsClient};
pub use config::ChunkyConfig;
pub use error::{AwsError, ChunkyError};
pub use handlers::{
    chunk_handler, execute_chunker_handler, failed_chunk_handler, Chunker, DEFAULT_CHUNK_SIZE,
};
pub use processor::{
    ChunkProcessor, FixedChunkProcessor, RandomChunkProcessor, SequenceChunkProcessor,
};
pub use types::{BatchState, ChunkResult, ExecutorEvent, Record};
