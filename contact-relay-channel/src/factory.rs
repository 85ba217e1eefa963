//! Channel factory functions.

use std::sync::Arc;

use reqwest::Client;

use crate::error::{ChannelError, Result};
use crate::traits::DeliveryChannel;
use crate::types::ChannelEndpoint;

use crate::providers::FormspreeChannel;

/// Creates a [`DeliveryChannel`] for one destination.
///
/// The templated URL is validated up front so a malformed base or identifier
/// surfaces as [`ChannelError::InvalidEndpoint`] before any request is made.
/// The returned channel is wrapped in `Arc<dyn DeliveryChannel>` so it can be
/// moved into concurrent delivery futures.
///
/// # Examples
///
/// ```rust,no_run
/// use contact_relay_channel::{ChannelEndpoint, create_channel};
///
/// let channel = create_channel(&ChannelEndpoint::new("abc123"), None).unwrap();
/// assert_eq!(channel.endpoint_id(), "abc123");
/// ```
pub fn create_channel(
    endpoint: &ChannelEndpoint,
    client: Option<&Client>,
) -> Result<Arc<dyn DeliveryChannel>> {
    validate_endpoint(endpoint)?;

    let channel = match client {
        Some(client) => FormspreeChannel::with_client(client.clone(), endpoint.clone()),
        None => FormspreeChannel::new(endpoint.clone()),
    };
    Ok(Arc::new(channel))
}

fn validate_endpoint(endpoint: &ChannelEndpoint) -> Result<()> {
    let channel = format!("formspree:{}", endpoint.form_id);
    let form_id = endpoint.form_id.trim();
    if form_id.is_empty() || form_id.contains(['/', '?', '#']) {
        return Err(ChannelError::InvalidEndpoint {
            channel,
            detail: format!("invalid form identifier '{}'", endpoint.form_id),
        });
    }

    let parsed = url::Url::parse(&endpoint.url()).map_err(|e| ChannelError::InvalidEndpoint {
        channel: channel.clone(),
        detail: format!("{e}: {}", endpoint.url()),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ChannelError::InvalidEndpoint {
            channel,
            detail: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    Ok(())
}
