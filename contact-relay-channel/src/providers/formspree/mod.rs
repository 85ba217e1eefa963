//! Formspree-compatible form endpoint

mod channel;
mod types;

use reqwest::Client;

use crate::http_client::create_http_client;
use crate::types::ChannelEndpoint;

pub(crate) use types::FormspreeResponse;

/// Formspree 投递渠道
///
/// Posts JSON to `{base_url}/{form_id}`. Any endpoint speaking the same
/// protocol (2xx on accept, JSON `error`/`errors` on reject) works.
pub struct FormspreeChannel {
    pub(crate) client: Client,
    pub(crate) endpoint: ChannelEndpoint,
    pub(crate) name: String,
}

impl FormspreeChannel {
    pub fn new(endpoint: ChannelEndpoint) -> Self {
        Self::with_client(create_http_client(), endpoint)
    }

    /// Share one connection pool across channels.
    pub fn with_client(client: Client, endpoint: ChannelEndpoint) -> Self {
        let name = format!("formspree:{}", endpoint.form_id);
        Self {
            client,
            endpoint,
            name,
        }
    }
}
