//! Chunk processing strategies.
//!
//! Real work on a chunk would call out to another system. The chunk
//! transform only needs an outcome code back, so that call sits behind the
//! [`ChunkProcessor`] trait and the handlers never depend on a concrete
//! implementation.

use std::collections::VecDeque;
use std::sync::Mutex;

use rand::seq::SliceRandom;

use crate::types::{ChunkResult, Record};

/// Outcome code for a chunk that went through.
pub const RESPONSE_OK: i64 = ChunkResult::SUCCESS_RESPONSE;

/// Outcome code for a chunk that was throttled.
pub const RESPONSE_TOO_MANY_REQUESTS: i64 = 429;

/// Outcome code for a chunk whose downstream was unavailable.
pub const RESPONSE_SERVICE_UNAVAILABLE: i64 = 503;

/// The codes [`RandomChunkProcessor`] picks from.
pub const SIMULATED_RESPONSES: [i64; 3] = [
    RESPONSE_OK,
    RESPONSE_TOO_MANY_REQUESTS,
    RESPONSE_SERVICE_UNAVAILABLE,
];

/// Produces an outcome code for a chunk of records.
pub trait ChunkProcessor: Send + Sync {
    /// Processes `chunk` and returns its outcome code.
    fn process(&self, chunk: &[Record]) -> i64;
}

impl<F> ChunkProcessor for F
where
    F: Fn(&[Record]) -> i64 + Send + Sync,
{
    fn process(&self, chunk: &[Record]) -> i64 {
        self(chunk)
    }
}

/// Stand-in for real processing: picks uniformly from [`SIMULATED_RESPONSES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomChunkProcessor;

impl RandomChunkProcessor {
    /// Creates a new RandomChunkProcessor.
    pub fn new() -> Self {
        Self
    }
}

impl ChunkProcessor for RandomChunkProcessor {
    fn process(&self, _chunk: &[Record]) -> i64 {
        SIMULATED_RESPONSES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(RESPONSE_OK)
    }
}

/// Always returns the same outcome code.
#[derive(Debug, Clone, Copy)]
pub struct FixedChunkProcessor {
    response: i64,
}

impl FixedChunkProcessor {
    /// Creates a processor that always answers `response`.
    pub fn new(response: i64) -> Self {
        Self { response }
    }

    /// Creates a processor that always succeeds.
    pub fn succeeding() -> Self {
        Self::new(RESPONSE_OK)
    }
}

impl ChunkProcessor for FixedChunkProcessor {
    fn process(&self, _chunk: &[Record]) -> i64 {
        self.response
    }
}

/// Returns queued outcome codes in order, then a fallback once they run out.
#[derive(Debug)]
pub struct SequenceChunkProcessor {
    responses: Mutex<VecDeque<i64>>,
    fallback: i64,
}

impl SequenceChunkProcessor {
    /// Creates a processor answering `responses` in order, then [`RESPONSE_OK`].
    pub fn new(responses: impl IntoIterator<Item = i64>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            fallback: RESPONSE_OK,
        }
    }

    /// Sets the code returned after the queue is drained.
    pub fn with_fallback(mut self, fallback: i64) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of queued codes not yet returned.
    pub fn pending(&self) -> usize {
        self.responses
            .lock()
            .map(|responses| responses.len())
            .unwrap_or(0)
    }
}

impl ChunkProcessor for SequenceChunkProcessor {
    fn process(&self, _chunk: &[Record]) -> i64 {
        let mut responses = match self.responses.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        responses.pop_front().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_random_processor_stays_in_range() {
        let processor = RandomChunkProcessor::new();
        let chunk = vec![json!(1)];
        for _ in 0..200 {
            assert!(SIMULATED_RESPONSES.contains(&processor.process(&chunk)));
        }
    }

    #[test]
    fn test_random_processor_handles_empty_chunk() {
        let code = RandomChunkProcessor::new().process(&[]);
        assert!(SIMULATED_RESPONSES.contains(&code));
    }

    #[test]
    fn test_fixed_processor() {
        let processor = FixedChunkProcessor::new(RESPONSE_TOO_MANY_REQUESTS);
        assert_eq!(processor.process(&[]), 429);
        assert_eq!(FixedChunkProcessor::succeeding().process(&[]), 200);
    }

    #[test]
    fn test_sequence_processor_order_and_fallback() {
        let processor = SequenceChunkProcessor::new([503, 429]).with_fallback(RESPONSE_OK);
        assert_eq!(processor.pending(), 2);
        assert_eq!(processor.process(&[]), 503);
        assert_eq!(processor.process(&[]), 429);
        assert_eq!(processor.process(&[]), 200);
        assert_eq!(processor.pending(), 0);
    }

    #[test]
    fn test_closure_processor() {
        let processor = |chunk: &[Record]| -> i64 { if chunk.is_empty() { 503 } else { 200 } };
        assert_eq!(processor.process(&[]), 503);
        assert_eq!(processor.process(&[json!(1)]), 200);
    }
}
