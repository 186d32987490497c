//! Runtime configuration for the chunky handlers.
//!
//! Configuration is read from the environment once per Lambda cold start and
//! then passed into each handler invocation, so tests can build it directly
//! without touching process state.

use crate::error::ChunkyError;

/// Environment variable holding the AWS region for the Step Functions client.
pub const REGION_ENV: &str = "REGION";

/// Environment variable holding the ARN of the state machine to start.
pub const STATE_MACHINE_ARN_ENV: &str = "STATE_MACHINE_ARN";

/// Environment variable overriding the run name prefix.
pub const EXECUTION_NAME_PREFIX_ENV: &str = "EXECUTION_NAME_PREFIX";

/// Region used when `REGION` is not set.
pub const DEFAULT_REGION: &str = "us-west-2";

/// Run name prefix used when `EXECUTION_NAME_PREFIX` is not set.
pub const DEFAULT_EXECUTION_NAME_PREFIX: &str = "chunky";

/// Configuration shared by the handlers.
///
/// The state machine ARN is optional here and only checked when the
/// initiator needs it, so the `chunk` and `failed-chunk` functions can share
/// the same loader without carrying an ARN.
///
/// ## Example
///
/// ```rust
/// use chunky::ChunkyConfig;
///
/// let config = ChunkyConfig::default()
///     .with_state_machine_arn("arn:aws:states:us-west-2:123456789012:stateMachine:chunky");
///
/// assert_eq!(config.region, "us-west-2");
/// assert!(config.state_machine_arn().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkyConfig {
    /// AWS region for the Step Functions client
    pub region: String,
    /// ARN of the state machine started by the initiator
    pub state_machine_arn: Option<String>,
    /// Prefix of every run name
    pub execution_name_prefix: String,
}

impl Default for ChunkyConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            state_machine_arn: None,
            execution_name_prefix: DEFAULT_EXECUTION_NAME_PREFIX.to_string(),
        }
    }
}

impl ChunkyConfig {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            region: lookup(REGION_ENV).unwrap_or(defaults.region),
            state_machine_arn: lookup(STATE_MACHINE_ARN_ENV),
            execution_name_prefix: lookup(EXECUTION_NAME_PREFIX_ENV)
                .unwrap_or(defaults.execution_name_prefix),
        }
    }

    /// Sets the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Sets the state machine ARN.
    pub fn with_state_machine_arn(mut self, state_machine_arn: impl Into<String>) -> Self {
        self.state_machine_arn = Some(state_machine_arn.into());
        self
    }

    /// Sets the run name prefix.
    pub fn with_execution_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.execution_name_prefix = prefix.into();
        self
    }

    /// Returns the state machine ARN, or a configuration error if it is unset.
    pub fn state_machine_arn(&self) -> Result<&str, ChunkyError> {
        self.state_machine_arn.as_deref().ok_or_else(|| {
            ChunkyError::configuration(format!(
                "{} must be set to start an execution",
                STATE_MACHINE_ARN_ENV
            ))
        })
    }
}
