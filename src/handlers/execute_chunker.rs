//! Initiator handler.
//!
//! Wraps the incoming records in a [`BatchState`] and starts a new state
//! machine run with it as input.

use chrono::Utc;

use crate::client::OrchestratorClient;
use crate::config::ChunkyConfig;
use crate::error::ChunkyError;
use crate::naming::execution_name;
use crate::types::{BatchState, ExecutorEvent};

/// Starts a chunking run for the records in `event`.
///
/// # Arguments
///
/// * `event` - The initiator event; a missing `payload` is an empty batch
/// * `config` - Supplies the state machine ARN and run name prefix
/// * `client` - The orchestrator to start the run on
///
/// # Returns
///
/// `Ok(())` once the orchestrator accepted the run.
///
/// # Errors
///
/// A missing state machine ARN or an invalid run name fails before the
/// orchestrator is called. Errors from the orchestrator are returned as they
/// came back, without retrying.
pub async fn execute_chunker_handler(
    event: ExecutorEvent,
    config: &ChunkyConfig,
    client: &dyn OrchestratorClient,
) -> Result<(), ChunkyError> {
    let state_machine_arn = config.state_machine_arn()?;
    let name = execution_name(&config.execution_name_prefix, Utc::now())?;

    let state = BatchState::new(event.payload);
    let input = serde_json::to_string(&state)
        .map_err(|e| ChunkyError::serdes(format!("Failed to encode batch state: {}", e)))?;

    tracing::info!(
        execution_name = %name,
        state_machine_arn,
        records_remaining = state.records_remaining,
        "Starting chunking execution"
    );

    if let Err(err) = client.start_execution(state_machine_arn, &name, &input).await {
        tracing::error!(
            execution_name = %name,
            error_type = err.error_type(),
            error = %err,
            "Failed to start chunking execution"
        );
        return Err(err);
    }

    Ok(())
}
