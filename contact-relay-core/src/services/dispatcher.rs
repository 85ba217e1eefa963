//! 多目标提交分发服务

use std::sync::Arc;

use futures::future::join_all;

use crate::error::{CoreError, CoreResult};
use crate::traits::ChannelFactory;
use crate::types::{
    ChannelEndpoint, DestinationConfig, DestinationResult, DispatchOutcome, OverallStatus,
    SubmissionPayload,
};

/// Fans one submission out to every configured destination.
///
/// All destinations are attempted concurrently and the dispatcher waits for
/// every one of them to settle. The submission counts as delivered if any
/// single destination accepted it.
pub struct SubmissionDispatcher {
    factory: Arc<dyn ChannelFactory>,
}

impl SubmissionDispatcher {
    #[must_use]
    pub fn new(factory: Arc<dyn ChannelFactory>) -> Self {
        Self { factory }
    }

    /// Deliver `payload` to every endpoint in `config`.
    ///
    /// Returns `Ok` when at least one destination accepted; the outcome still
    /// lists the destinations that did not. Returns
    /// [`CoreError::ConfigurationError`] without issuing any request when the
    /// endpoint list is unusable, and [`CoreError::AggregateFailure`] when every
    /// destination was attempted and none accepted.
    pub async fn dispatch(
        &self,
        payload: &SubmissionPayload,
        config: &DestinationConfig,
    ) -> CoreResult<DispatchOutcome> {
        if !config.endpoints_configured() {
            return Err(CoreError::ConfigurationError(
                "Form service not configured: no valid destination endpoints".to_string(),
            ));
        }

        // Build every channel before sending anything, so a malformed endpoint
        // fails the whole attempt with zero network activity.
        let channels = config
            .endpoints
            .iter()
            .map(|id| {
                let endpoint = ChannelEndpoint::with_base(&config.endpoint_base, id);
                self.factory.channel_for(&endpoint).map_err(|e| {
                    CoreError::ConfigurationError(format!("Invalid destination '{id}': {e}"))
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        let body = payload.to_body(config);
        let total = channels.len();
        log::debug!("Dispatching submission to {total} destination(s)");

        let deliveries = channels.into_iter().map(|channel| {
            let body = &body;
            async move {
                let result = channel.deliver(body).await;
                DestinationResult::from_delivery(channel.endpoint_id(), result)
            }
        });
        let outcome = DispatchOutcome {
            results: join_all(deliveries).await,
        };

        match outcome.status() {
            OverallStatus::Success => {
                let failed = outcome.failed_count();
                if failed > 0 {
                    log::warn!(
                        "{failed} of {total} form submissions failed: {}",
                        outcome.failed_endpoints().join(", ")
                    );
                }
                Ok(outcome)
            }
            OverallStatus::Failure => {
                for result in &outcome.results {
                    log::warn!(
                        "Destination {} failed: {}",
                        result.endpoint_id,
                        result.error.as_deref().unwrap_or("unknown error")
                    );
                }
                Err(CoreError::AggregateFailure(outcome))
            }
        }
    }
}
