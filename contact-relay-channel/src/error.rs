use serde::{Deserialize, Serialize};

/// Unified error type for all delivery channel operations.
///
/// Each variant includes a `channel` field identifying which destination produced
/// the error, plus variant-specific context. All variants are serializable for
/// structured error reporting.
///
/// # Rejection vs. transport failure
///
/// [`Rejected`](Self::Rejected) means the destination answered and declined the
/// submission. Every other variant means the request never completed, which the
/// dispatcher records as a transport failure (see [`is_rejection`](Self::is_rejection)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ChannelError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Channel that produced the error.
        channel: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Channel that produced the error.
        channel: String,
        /// Error details.
        detail: String,
    },

    /// The destination responded with a non-success status.
    Rejected {
        /// Channel that produced the error.
        channel: String,
        /// HTTP status code returned by the destination.
        status: u16,
        /// Error message extracted from the response body, if available.
        raw_message: Option<String>,
    },

    /// Failed to serialize the request body.
    SerializationError {
        /// Channel that produced the error.
        channel: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// The endpoint URL could not be built from the configured base and identifier.
    InvalidEndpoint {
        /// Channel that produced the error.
        channel: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl ChannelError {
    /// Whether the destination answered and declined, as opposed to the request
    /// failing before a response was read.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// 是否为预期行为（目标端拒绝、配置错误等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::InvalidEndpoint { .. })
    }
}

impl std::fmt::Display for ChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { channel, detail } => {
                write!(f, "[{channel}] Network error: {detail}")
            }
            Self::Timeout { channel, detail } => {
                write!(f, "[{channel}] Request timeout: {detail}")
            }
            Self::Rejected {
                channel,
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{channel}] Rejected (HTTP {status}): {msg}")
                } else {
                    write!(f, "[{channel}] Rejected (HTTP {status})")
                }
            }
            Self::SerializationError { channel, detail } => {
                write!(f, "[{channel}] Serialization error: {detail}")
            }
            Self::InvalidEndpoint { channel, detail } => {
                write!(f, "[{channel}] Invalid endpoint: {detail}")
            }
        }
    }
}

impl std::error::Error for ChannelError {}

/// Convenience type alias for `Result<T, ChannelError>`.
pub type Result<T> = std::result::Result<T, ChannelError>;
