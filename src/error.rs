//! Error types and handling for the travel planner

use std::fmt;

use thiserror::Error;

/// External services the planner talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Geocoding,
    Forecast,
    Places,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::Geocoding => "geocoding",
            Provider::Forecast => "forecast",
            Provider::Places => "places",
        };
        f.write_str(name)
    }
}

/// Main error type for the travel planner
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Caller input failed validation; no upstream call was made
    #[error("Invalid input: {}", .messages.join("; "))]
    Validation { messages: Vec<String> },

    /// An upstream provider failed or answered with something unusable
    #[error("{provider} provider error: {message}")]
    Upstream { provider: Provider, message: String },

    /// Configuration-related errors (missing credential, bad settings)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The whole request ran past its deadline
    #[error("Request did not complete within {seconds}s")]
    Timeout { seconds: u64 },
}

impl PlannerError {
    /// Create a validation error carrying a single message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            messages: vec![message.into()],
        }
    }

    /// Create a validation error carrying several messages
    #[must_use]
    pub fn validation_many(messages: Vec<String>) -> Self {
        Self::Validation { messages }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(provider: Provider, message: S) -> Self {
        Self::Upstream {
            provider,
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether the caller is at fault
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, PlannerError::Validation { .. })
    }

    /// Get a user-friendly error message
    ///
    /// Only validation messages are passed through; everything else is
    /// reported generically so provider details never reach the caller.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PlannerError::Validation { messages } => messages.join("; "),
            PlannerError::Upstream { .. }
            | PlannerError::Config { .. }
            | PlannerError::Timeout { .. } => "Internal server error".to_string(),
        }
    }
}
