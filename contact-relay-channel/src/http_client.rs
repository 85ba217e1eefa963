//! Generic HTTP client tools
//!
//! Shared request execution for every channel: sending, logging, reading the
//! response. Each channel still builds its own `RequestBuilder`.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ChannelError;
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
///
/// Falls back to an unconfigured client if the builder fails (TLS backend
/// initialisation), which only loses the timeouts.
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|e| {
            log::warn!("Failed to build configured HTTP client, using defaults: {e}");
            Client::new()
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// No status is treated as an error here; classifying 2xx vs. the rest is
    /// the channel's decision. Only failures to send or to read the body are
    /// returned as errors.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `channel_name` - channel name (for logging and errors)
    /// * `method_name` - request method name (for logging)
    /// * `url` - target URL (for logging)
    pub async fn execute_request(
        request_builder: RequestBuilder,
        channel_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ChannelError> {
        log::debug!("[{channel_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ChannelError::Timeout {
                    channel: channel_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ChannelError::NetworkError {
                    channel: channel_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{channel_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ChannelError::NetworkError {
                channel: channel_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{channel_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body, returning `None` when it is not the expected shape.
    ///
    /// Form endpoints are not obliged to answer with JSON (proxies, HTML error
    /// pages), so a parse failure is logged and tolerated rather than raised.
    pub fn parse_json<T>(response_text: &str, channel_name: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        match serde_json::from_str(response_text) {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!(
                    "[{channel_name}] Response is not JSON ({e}): {}",
                    truncate_for_log(response_text)
                );
                None
            }
        }
    }
}

/// Whether an HTTP status code means the destination accepted the submission.
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}
