//! Fallback compose builder
//!
//! When every destination failed, the user can still reach the team through
//! their own mail client. Nothing here touches the network.

use std::fmt;

use serde::Serialize;

use crate::types::{DestinationConfig, InquiryCategory};

/// A `mailto:` compose request handed to the host environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeTarget {
    /// Recipients, already joined with `,`.
    pub recipients: String,
    pub subject: String,
    pub body: String,
}

impl ComposeTarget {
    /// Render as a `mailto:` URI with percent-encoded subject and body.
    pub fn uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipients,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

impl fmt::Display for ComposeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri())
    }
}

/// Build the compose request from the current field values.
///
/// Addressed to every configured display address, with the same subject the
/// dispatcher would have sent.
pub fn compose_fallback(
    config: &DestinationConfig,
    email: &str,
    category: InquiryCategory,
    message: &str,
) -> ComposeTarget {
    ComposeTarget {
        recipients: config.compose_recipients(),
        subject: category.subject(),
        body: format!("Email: {email}\r\n\r\nMessage: {message}"),
    }
}
