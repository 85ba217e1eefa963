//! 分发结果相关类型定义

use serde::Serialize;

use contact_relay_channel::{ChannelError, Delivery};

/// How a single destination settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DestinationStatus {
    /// The destination accepted the submission.
    Accepted,
    /// The destination answered and declined.
    Rejected,
    /// The request never completed (network error, timeout, bad endpoint).
    TransportFailed,
}

/// Per-destination result. Failures are recorded here as data, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationResult {
    pub endpoint_id: String,
    pub status: DestinationStatus,
    /// HTTP status, when the destination answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    /// Error text for failed destinations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DestinationResult {
    /// Classify a settled delivery.
    pub fn from_delivery(
        endpoint_id: impl Into<String>,
        result: Result<Delivery, ChannelError>,
    ) -> Self {
        let endpoint_id = endpoint_id.into();
        match result {
            Ok(delivery) => Self {
                endpoint_id,
                status: DestinationStatus::Accepted,
                http_status: Some(delivery.status),
                error: None,
            },
            Err(e) => {
                let (status, http_status) = match &e {
                    ChannelError::Rejected { status, .. } => {
                        (DestinationStatus::Rejected, Some(*status))
                    }
                    _ => (DestinationStatus::TransportFailed, None),
                };
                Self {
                    endpoint_id,
                    status,
                    http_status,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == DestinationStatus::Accepted
    }
}

/// Aggregate verdict under the any-one-succeeds policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OverallStatus {
    /// At least one destination accepted.
    Success,
    /// Every destination rejected or failed.
    Failure,
}

/// Results of one fan-out, in destination order.
///
/// Built fresh per submission attempt and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchOutcome {
    pub results: Vec<DestinationResult>,
}

impl DispatchOutcome {
    pub fn status(&self) -> OverallStatus {
        if self.results.iter().any(DestinationResult::is_accepted) {
            OverallStatus::Success
        } else {
            OverallStatus::Failure
        }
    }

    pub fn accepted_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_accepted()).count()
    }

    /// Destinations that did not accept, for diagnostics.
    pub fn failed(&self) -> impl Iterator<Item = &DestinationResult> {
        self.results.iter().filter(|r| !r.is_accepted())
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    /// Identifiers of the destinations that did not accept.
    pub fn failed_endpoints(&self) -> Vec<&str> {
        self.failed().map(|r| r.endpoint_id.as_str()).collect()
    }
}
