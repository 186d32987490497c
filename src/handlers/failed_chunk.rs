//! Failed chunk handler.
//!
//! Runs when the state machine sees an unsuccessful `chunkResponse`. The
//! failed chunk is logged and dropped, and the remaining records go back to
//! the chunk handler.

use crate::types::{BatchState, ChunkResult};

/// Drops the failed chunk and returns the state needed to keep chunking.
///
/// The dropped records are only logged. Anything that must survive a failed
/// chunk (a dead-letter table, a retry queue) has to be added here; no
/// recovery is attempted.
///
/// # Arguments
///
/// * `result` - The chunk result whose outcome was a failure
///
/// # Returns
///
/// The `records` of `result`, with `recordsRemaining` recounted from them.
pub fn failed_chunk_handler(result: ChunkResult) -> BatchState {
    tracing::warn!(
        chunk_len = result.chunk_processed.len(),
        chunk_response = result.chunk_response,
        records_remaining = result.records.len(),
        "These failed to process: {}",
        serde_json::Value::Array(result.chunk_processed.clone())
    );

    result.into_remaining()
}
