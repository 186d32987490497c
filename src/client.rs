//! Orchestrator client for starting state machine runs.
//!
//! This module defines the `OrchestratorClient` trait and a Step Functions
//! implementation built on `aws-sdk-sfn`. The initiator only ever talks to
//! the trait, so tests can substitute a fake.

use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_sfn::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

use crate::config::ChunkyConfig;
use crate::error::{AwsError, ChunkyError};

/// Trait for starting runs on the external orchestrator.
#[async_trait]
pub trait OrchestratorClient: Send + Sync {
    /// Starts a new run of a state machine.
    ///
    /// # Arguments
    ///
    /// * `state_machine_arn` - The ARN of the state machine to run
    /// * `name` - The run name, unique within the orchestrator's reuse window
    /// * `input` - The JSON-encoded start input
    ///
    /// # Returns
    ///
    /// `Ok(())` once the orchestrator accepted the run. Completion of the run
    /// itself is never awaited.
    async fn start_execution(
        &self,
        state_machine_arn: &str,
        name: &str,
        input: &str,
    ) -> Result<(), ChunkyError>;
}

/// Type alias for a shared OrchestratorClient.
pub type SharedOrchestratorClient = Arc<dyn OrchestratorClient>;

/// Step Functions implementation of the OrchestratorClient.
#[derive(Debug, Clone)]
pub struct StepFunctionsClient {
    client: aws_sdk_sfn::Client,
}

impl StepFunctionsClient {
    /// Wraps an existing Step Functions client.
    pub fn new(client: aws_sdk_sfn::Client) -> Self {
        Self { client }
    }

    /// Creates a client for the configured region using the default
    /// credential chain.
    pub async fn from_config(config: &ChunkyConfig) -> Self {
        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .load()
            .await;
        Self::from_aws_config(&aws_config)
    }

    /// Creates a client from AWS SDK config.
    pub fn from_aws_config(aws_config: &aws_config::SdkConfig) -> Self {
        Self::new(aws_sdk_sfn::Client::new(aws_config))
    }
}

#[async_trait]
impl OrchestratorClient for StepFunctionsClient {
    async fn start_execution(
        &self,
        state_machine_arn: &str,
        name: &str,
        input: &str,
    ) -> Result<(), ChunkyError> {
        let output = self
            .client
            .start_execution()
            .state_machine_arn(state_machine_arn)
            .name(name)
            .input(input)
            .send()
            .await
            .map_err(from_sdk_error)?;

        tracing::debug!(
            execution_arn = output.execution_arn(),
            "Orchestrator accepted execution"
        );

        Ok(())
    }
}

/// Maps an SDK failure onto [`ChunkyError::Orchestrator`].
///
/// Service metadata is only attached when the service actually answered
/// with an error code. Dispatch, timeout and response failures carry no
/// code, and the SDK error stays reachable through `source()`.
fn from_sdk_error<E, R>(err: SdkError<E, R>) -> ChunkyError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    let aws_error = err
        .code()
        .map(|code| AwsError::new(code, err.message().unwrap_or_default()));
    ChunkyError::Orchestrator {
        message: DisplayErrorContext(&err).to_string(),
        aws_error,
        source: Some(Box::new(err)),
    }
}

/// A mock implementation of OrchestratorClient for testing.
#[cfg(test)]
pub struct MockOrchestratorClient {
    responses: std::sync::Mutex<Vec<Result<(), ChunkyError>>>,
    calls: std::sync::Mutex<Vec<(String, String, String)>>,
}

#[cfg(test)]
impl MockOrchestratorClient {
    pub fn new() -> Self {
        Self {
            responses: std::sync::Mutex::new(Vec::new()),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(self, response: Result<(), ChunkyError>) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Returns `(state_machine_arn, name, input)` for every call so far.
    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl OrchestratorClient for MockOrchestratorClient {
    async fn start_execution(
        &self,
        state_machine_arn: &str,
        name: &str,
        input: &str,
    ) -> Result<(), ChunkyError> {
        self.calls.lock().unwrap().push((
            state_machine_arn.to_string(),
            name.to_string(),
            input.to_string(),
        ));
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(())
        } else {
            responses.remove(0)
        }
    }
}
