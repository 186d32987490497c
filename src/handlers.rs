//! Lambda handlers for the chunky workflow.
//!
//! Each handler is a stateless transform invoked once per state machine
//! step. The state machine, not this crate, decides which one runs next.

pub mod chunk;
pub mod execute_chunker;
pub mod failed_chunk;

pub use chunk::{chunk_handler, Chunker, DEFAULT_CHUNK_SIZE};
pub use execute_chunker::execute_chunker_handler;
pub use failed_chunk::failed_chunk_handler;
