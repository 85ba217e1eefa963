use serde::{Deserialize, Serialize};

// ============ Request ============

/// JSON body posted to every destination.
///
/// Field names follow the form endpoint's camelCase convention, so the
/// receiving side sees `email`, `inquiryType`, `message`, `destinationEmails`
/// and `subject`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionBody {
    /// Sender address entered by the user.
    pub email: String,
    /// Wire value of the inquiry category (e.g. `hospital`).
    pub inquiry_type: String,
    /// Free-text message, possibly empty.
    pub message: String,
    /// Every configured display address joined into one string, for human tracking.
    pub destination_emails: String,
    /// Subject line derived from the inquiry category.
    pub subject: String,
}

// ============ Response ============

/// A destination accepted the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    /// HTTP status code of the accepting response (always 2xx).
    pub status: u16,
}

// ============ Endpoint ============

/// Default base for the per-destination URL template.
pub const DEFAULT_ENDPOINT_BASE: &str = "https://formspree.io/f";

/// Where a channel posts to: `{base_url}/{form_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelEndpoint {
    /// URL prefix shared by every destination.
    pub base_url: String,
    /// Destination identifier appended to the base.
    pub form_id: String,
}

impl ChannelEndpoint {
    /// Endpoint on the default base URL.
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT_BASE.to_string(),
            form_id: form_id.into(),
        }
    }

    /// Endpoint on a custom base URL (self-hosted relays, test servers).
    pub fn with_base(base_url: impl Into<String>, form_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            form_id: form_id.into(),
        }
    }

    /// Fully templated URL, tolerating a trailing slash on the base.
    pub fn url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.form_id)
    }
}
