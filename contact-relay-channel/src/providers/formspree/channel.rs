//! Formspree `DeliveryChannel` 实现

use async_trait::async_trait;

use crate::error::{ChannelError, Result};
use crate::http_client::{HttpUtils, is_success_status};
use crate::traits::DeliveryChannel;
use crate::types::{Delivery, SubmissionBody};

use super::{FormspreeChannel, FormspreeResponse};

#[async_trait]
impl DeliveryChannel for FormspreeChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn endpoint_id(&self) -> &str {
        &self.endpoint.form_id
    }

    async fn deliver(&self, body: &SubmissionBody) -> Result<Delivery> {
        let url = self.endpoint.url();
        let payload = serde_json::to_string(body).map_err(|e| ChannelError::SerializationError {
            channel: self.name.clone(),
            detail: e.to_string(),
        })?;

        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(payload);

        let (status, response_text) =
            HttpUtils::execute_request(request, &self.name, "POST", &url).await?;

        if is_success_status(status) {
            return Ok(Delivery { status });
        }

        let raw_message = HttpUtils::parse_json::<FormspreeResponse>(&response_text, &self.name)
            .and_then(|resp| resp.rejection_message());
        log::warn!("[{}] Submission rejected (HTTP {status})", self.name);

        Err(ChannelError::Rejected {
            channel: self.name.clone(),
            status,
            raw_message,
        })
    }
}
