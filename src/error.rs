//! Error types for the chunky handlers.
//!
//! The chunk transform and failure handler cannot fail once their input has
//! been deserialized, so every variant here belongs to the initiator path:
//! reading configuration, building the run name, encoding the batch, and
//! calling the orchestrator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for the chunky handlers.
#[derive(Debug, Error)]
pub enum ChunkyError {
    /// Required configuration is missing or malformed.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing what is missing
        message: String,
    },

    /// Validation error for invalid arguments (chunk size, run name).
    #[error("Validation error: {message}")]
    Validation {
        /// Error message describing the validation failure
        message: String,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    SerDes {
        /// Error message describing the serialization failure
        message: String,
    },

    /// The orchestrator rejected or failed the start-execution call.
    #[error("Orchestrator error: {message}")]
    Orchestrator {
        /// Error message describing what went wrong
        message: String,
        /// Error metadata reported by the service, if any
        aws_error: Option<AwsError>,
        /// The underlying SDK error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ChunkyError {
    /// Creates a new Configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a new Validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a new SerDes error.
    pub fn serdes(message: impl Into<String>) -> Self {
        Self::SerDes {
            message: message.into(),
        }
    }

    /// Creates a new Orchestrator error without service metadata.
    pub fn orchestrator(message: impl Into<String>) -> Self {
        Self::Orchestrator {
            message: message.into(),
            aws_error: None,
            source: None,
        }
    }

    /// Returns true if this error came from the orchestrator call.
    pub fn is_orchestrator(&self) -> bool {
        matches!(self, Self::Orchestrator { .. })
    }

    /// Returns true if this error was raised before anything was sent.
    pub fn is_local(&self) -> bool {
        !self.is_orchestrator()
    }

    /// Returns the service error code, if the orchestrator reported one.
    pub fn aws_error_code(&self) -> Option<&str> {
        match self {
            Self::Orchestrator {
                aws_error: Some(aws_error),
                ..
            } => Some(aws_error.code.as_str()),
            _ => None,
        }
    }

    /// Short name of the error kind, used as the error type in logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "ConfigurationError",
            Self::Validation { .. } => "ValidationError",
            Self::SerDes { .. } => "SerDesError",
            Self::Orchestrator { .. } => "OrchestratorError",
        }
    }
}

/// AWS error details for orchestrator failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsError {
    /// The AWS error code
    pub code: String,
    /// The AWS error message
    pub message: String,
}

impl AwsError {
    /// Creates a new AwsError.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ChunkyError {
    fn from(error: serde_json::Error) -> Self {
        Self::SerDes {
            message: error.to_string(),
        }
    }
}
