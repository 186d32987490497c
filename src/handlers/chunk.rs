//! Chunk handler.
//!
//! Splits a fixed-size prefix off the remaining records, runs it through the
//! configured [`ChunkProcessor`], and hands the remainder back to the state
//! machine.

use crate::error::ChunkyError;
use crate::processor::ChunkProcessor;
use crate::types::{BatchState, ChunkResult, Record};

/// Number of records taken per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 5;

/// Splits record collections into chunks of a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    chunk_size: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Chunker {
    /// Creates a Chunker taking `chunk_size` records per chunk.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `chunk_size` is zero, since the
    /// remainder would then never shrink.
    pub fn new(chunk_size: usize) -> Result<Self, ChunkyError> {
        if chunk_size == 0 {
            return Err(ChunkyError::validation("Chunk size must be at least 1"));
        }
        Ok(Self { chunk_size })
    }

    /// Returns the chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Splits `records` into `(chunk, remainder)`, preserving order in both.
    ///
    /// A collection shorter than the chunk size becomes the whole chunk and
    /// leaves an empty remainder.
    pub fn split(&self, mut records: Vec<Record>) -> (Vec<Record>, Vec<Record>) {
        if records.len() < self.chunk_size {
            return (records, Vec::new());
        }
        let remainder = records.split_off(self.chunk_size);
        (records, remainder)
    }
}

/// Processes the next chunk of a batch.
///
/// # Arguments
///
/// * `state` - The records still to be processed
/// * `chunker` - Decides how many records make up the chunk
/// * `processor` - Produces the outcome code for the chunk
///
/// # Returns
///
/// The processed chunk, its outcome code, and the remaining records with
/// their count. This never fails, including for an empty batch.
pub fn chunk_handler(
    state: BatchState,
    chunker: &Chunker,
    processor: &dyn ChunkProcessor,
) -> ChunkResult {
    let (chunk, remainder) = chunker.split(state.records);

    let chunk_response = processor.process(&chunk);

    tracing::info!(
        chunk_len = chunk.len(),
        chunk_response,
        records_remaining = remainder.len(),
        "This chunk was processed: {}",
        serde_json::Value::Array(chunk.clone())
    );

    ChunkResult::new(chunk, chunk_response, remainder)
}
