//! Channel factory abstract Trait

use std::sync::Arc;

use contact_relay_channel::{ChannelEndpoint, DeliveryChannel, create_channel, create_http_client};

use crate::error::CoreResult;

/// Channel Factory Trait
///
/// Builds one [`DeliveryChannel`] per destination. The dispatcher only ever
/// talks to channels through this seam, so tests can substitute recorders.
pub trait ChannelFactory: Send + Sync {
    /// Build the channel for one endpoint.
    ///
    /// # Arguments
    /// * `endpoint` - base URL plus endpoint identifier
    fn channel_for(&self, endpoint: &ChannelEndpoint) -> CoreResult<Arc<dyn DeliveryChannel>>;
}

/// HTTP channel factory
///
/// Default implementation; every channel it builds shares one connection pool.
#[derive(Clone)]
pub struct HttpChannelFactory {
    client: reqwest::Client,
}

impl HttpChannelFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: create_http_client(),
        }
    }
}

impl Default for HttpChannelFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelFactory for HttpChannelFactory {
    fn channel_for(&self, endpoint: &ChannelEndpoint) -> CoreResult<Arc<dyn DeliveryChannel>> {
        Ok(create_channel(endpoint, Some(&self.client))?)
    }
}
