//! 投递目标配置相关类型定义

use serde::Serialize;

use contact_relay_channel::DEFAULT_ENDPOINT_BASE;

/// Placeholder endpoint identifier used when none is configured.
pub const ENDPOINT_PLACEHOLDER: &str = "YOUR_FORM_ID";
/// Placeholder display address used when none is configured.
pub const DISPLAY_PLACEHOLDER: &str = "contact@example.com";

/// Resolved delivery configuration for one submission attempt.
///
/// Both lists are non-empty after resolution; whether they are usable is a
/// separate question answered by [`endpoints_configured`](Self::endpoints_configured).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationConfig {
    /// Endpoint identifiers, in fan-out order. Duplicates are kept.
    pub endpoints: Vec<String>,
    /// Display addresses shown to humans and used for the fallback compose.
    pub display_addresses: Vec<String>,
    /// Base URL each endpoint identifier is appended to.
    pub endpoint_base: String,
}

impl DestinationConfig {
    /// Configuration on the default endpoint base.
    pub fn new(endpoints: Vec<String>, display_addresses: Vec<String>) -> Self {
        Self {
            endpoints,
            display_addresses,
            endpoint_base: DEFAULT_ENDPOINT_BASE.to_string(),
        }
    }

    /// Whether the endpoint list can be dispatched to.
    ///
    /// False when the list is empty, contains the placeholder, or any element
    /// is blank.
    pub fn endpoints_configured(&self) -> bool {
        is_configured(&self.endpoints, ENDPOINT_PLACEHOLDER)
    }

    /// Whether the display-address list holds real addresses.
    ///
    /// Only drives diagnostics; an unconfigured display list never blocks dispatch.
    pub fn display_configured(&self) -> bool {
        is_configured(&self.display_addresses, DISPLAY_PLACEHOLDER)
            && !self
                .display_addresses
                .iter()
                .any(|addr| addr.contains("@example.com"))
    }

    /// Display addresses joined for the outbound `destinationEmails` field.
    pub fn tracking_addresses(&self) -> String {
        self.display_addresses.join(", ")
    }

    /// Display addresses joined for a compose recipient list.
    pub fn compose_recipients(&self) -> String {
        self.display_addresses.join(",")
    }
}

fn is_configured(list: &[String], sentinel: &str) -> bool {
    !list.is_empty()
        && !list
            .iter()
            .any(|item| item.trim().is_empty() || item == sentinel)
}

/// Execution mode read from configuration.
///
/// Only the exact value `development` enables diagnostics; anything else,
/// including an unset key, is production.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    Development,
    #[default]
    Production,
}

impl ExecutionMode {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("development") => Self::Development,
            _ => Self::Production,
        }
    }

    pub fn diagnostics_enabled(self) -> bool {
        self == Self::Development
    }
}
