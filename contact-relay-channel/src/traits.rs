use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Delivery, SubmissionBody};

/// 投递渠道 Trait
///
/// One implementation per kind of form-processing endpoint. A channel is bound
/// to exactly one destination; fan-out across destinations is the caller's job.
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    /// Channel identifier used in logs and error messages (e.g. `formspree:abc123`).
    fn name(&self) -> &str;

    /// Destination identifier this channel was built for.
    fn endpoint_id(&self) -> &str;

    /// Post one submission.
    ///
    /// `Ok` means the destination accepted it. A destination that answered with a
    /// non-success status yields [`ChannelError::Rejected`](crate::ChannelError::Rejected);
    /// any other error means the request did not complete.
    async fn deliver(&self, body: &SubmissionBody) -> Result<Delivery>;
}
