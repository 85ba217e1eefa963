//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::DispatchOutcome;

// Re-export library error type
pub use contact_relay_channel::ChannelError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No valid destinations; raised before any request is issued
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Every destination was attempted and none accepted the submission
    #[error("All {} form submissions failed", .0.results.len())]
    AggregateFailure(DispatchOutcome),

    /// Validation error (user input)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Channel error (converting from library)
    #[error("{0}")]
    Channel(#[from] ChannelError),
}

impl CoreError {
    /// Whether the fallback compose action should be offered for this error.
    ///
    /// Configuration and aggregate failures look the same to the end user;
    /// both leave the form in the failed state.
    #[must_use]
    pub fn is_submission_failure(&self) -> bool {
        matches!(self, Self::ConfigurationError(_) | Self::AggregateFailure(_))
    }

    /// Whether it is expected behavior (user input, missing configuration), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ConfigurationError(_) | Self::ValidationError(_) => true,
            Self::Channel(e) => e.is_expected(),
            Self::AggregateFailure(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
