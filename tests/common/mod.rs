//! Shared test utilities for integration tests.
//!
//! This module provides a recording orchestrator client and helpers for
//! building record batches and driving the chunk loop the way the state
//! machine does.

#![allow(dead_code)] // These utilities are used by other integration test files

use std::sync::Mutex;

use async_trait::async_trait;
use chunky::{
    chunk_handler, failed_chunk_handler, BatchState, ChunkProcessor, ChunkResult, Chunker,
    ChunkyError, OrchestratorClient, Record,
};
use serde_json::json;

// =============================================================================
// Mock Client for Integration Tests
// =============================================================================

/// Record of a start_execution call for test verification.
#[derive(Debug, Clone)]
pub struct StartExecutionCall {
    pub state_machine_arn: String,
    pub name: String,
    pub input: serde_json::Value,
}

/// An OrchestratorClient that records every call and replays queued results.
pub struct RecordingOrchestratorClient {
    responses: Mutex<Vec<Result<(), ChunkyError>>>,
    calls: Mutex<Vec<StartExecutionCall>>,
}

impl RecordingOrchestratorClient {
    /// Creates a client that accepts every call.
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queues a result for the next call.
    pub fn with_response(self, response: Result<(), ChunkyError>) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Returns all calls made so far.
    pub fn calls(&self) -> Vec<StartExecutionCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrchestratorClient for RecordingOrchestratorClient {
    async fn start_execution(
        &self,
        state_machine_arn: &str,
        name: &str,
        input: &str,
    ) -> Result<(), ChunkyError> {
        self.calls.lock().unwrap().push(StartExecutionCall {
            state_machine_arn: state_machine_arn.to_string(),
            name: name.to_string(),
            input: serde_json::from_str(input).expect("start input must be JSON"),
        });
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(())
        } else {
            responses.remove(0)
        }
    }
}

// =============================================================================
// Record helpers
// =============================================================================

/// Builds `count` numbered records starting at 1.
pub fn numbered_records(count: usize) -> Vec<Record> {
    (1..=count).map(|i| json!(i)).collect()
}

/// Builds `count` object records shaped like real work items.
pub fn object_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| json!({"id": format!("rec-{}", i), "attempt": 0}))
        .collect()
}

// =============================================================================
// State machine loop
// =============================================================================

/// What happened over a full run of the chunk loop.
#[derive(Debug, Default)]
pub struct LoopOutcome {
    /// Every chunk result in call order
    pub results: Vec<ChunkResult>,
    /// Chunks routed through the failure handler
    pub failed_chunks: Vec<Vec<Record>>,
    /// The state left when the loop ended
    pub final_state: BatchState,
}

impl LoopOutcome {
    pub fn chunk_calls(&self) -> usize {
        self.results.len()
    }

    /// All records from chunks that succeeded, in order.
    pub fn processed_records(&self) -> Vec<Record> {
        self.results
            .iter()
            .filter(|r| r.is_success())
            .flat_map(|r| r.chunk_processed.iter().cloned())
            .collect()
    }
}

/// Drives the handlers the way the state machine does: chunk until nothing
/// is left, sending unsuccessful chunks through the failure handler.
pub fn run_chunk_loop(
    records: Vec<Record>,
    chunker: &Chunker,
    processor: &dyn ChunkProcessor,
) -> LoopOutcome {
    let mut outcome = LoopOutcome::default();
    let mut state = BatchState::new(records);

    loop {
        let result = chunk_handler(state, chunker, processor);
        let done = result.records_remaining == 0;

        state = if result.is_success() {
            result.clone().into_remaining()
        } else {
            outcome.failed_chunks.push(result.chunk_processed.clone());
            failed_chunk_handler(result.clone())
        };
        outcome.results.push(result);

        if done {
            break;
        }
    }

    outcome.final_state = state;
    outcome
}
