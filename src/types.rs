//! Payload types exchanged with the state machine.
//!
//! Every struct here crosses the Lambda boundary as JSON, and the state
//! machine routes on the field names, so the wire names are pinned with
//! explicit renames.

use serde::{Deserialize, Serialize};

/// An opaque unit of work. Its content is never inspected.
pub type Record = serde_json::Value;

/// Event received by the initiator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutorEvent {
    /// The full record collection to process
    #[serde(rename = "payload", default)]
    pub payload: Vec<Record>,
}

impl ExecutorEvent {
    /// Creates a new ExecutorEvent.
    pub fn new(payload: Vec<Record>) -> Self {
        Self { payload }
    }
}

/// Records still waiting to be chunked.
///
/// This is both the input of the chunk transform and the output of the
/// failure handler. `records_remaining` always equals `records.len()` when
/// the value is built through [`BatchState::new`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchState {
    /// Records not yet processed, in their original order
    #[serde(rename = "records", default)]
    pub records: Vec<Record>,

    /// Number of entries in `records`
    #[serde(rename = "recordsRemaining", default)]
    pub records_remaining: usize,
}

impl BatchState {
    /// Creates a BatchState whose count matches its records.
    pub fn new(records: Vec<Record>) -> Self {
        let records_remaining = records.len();
        Self {
            records,
            records_remaining,
        }
    }

    /// Returns true once no records are left.
    pub fn is_complete(&self) -> bool {
        self.records.is_empty()
    }
}

/// Output of the chunk transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkResult {
    /// The records handled by this invocation
    #[serde(rename = "chunkProcessed")]
    pub chunk_processed: Vec<Record>,

    /// Outcome code reported for the chunk
    #[serde(rename = "chunkResponse")]
    pub chunk_response: i64,

    /// Records left after this chunk
    #[serde(rename = "records")]
    pub records: Vec<Record>,

    /// Number of entries in `records`
    #[serde(rename = "recordsRemaining")]
    pub records_remaining: usize,
}

impl ChunkResult {
    /// Outcome code the state machine treats as success.
    pub const SUCCESS_RESPONSE: i64 = 200;

    /// Creates a ChunkResult whose count matches its remainder.
    pub fn new(chunk_processed: Vec<Record>, chunk_response: i64, records: Vec<Record>) -> Self {
        let records_remaining = records.len();
        Self {
            chunk_processed,
            chunk_response,
            records,
            records_remaining,
        }
    }

    /// Returns true if the chunk was processed successfully.
    pub fn is_success(&self) -> bool {
        self.chunk_response == Self::SUCCESS_RESPONSE
    }

    /// Returns true once no records are left.
    pub fn is_complete(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops the chunk fields, keeping what is needed to resume chunking.
    ///
    /// The count is rebuilt from `records`, so an inconsistent incoming
    /// `recordsRemaining` is not carried forward.
    pub fn into_remaining(self) -> BatchState {
        BatchState::new(self.records)
    }
}
