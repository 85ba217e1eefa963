//! Destination configuration resolution
//!
//! Configuration arrives as a key → string lookup captured at process start.
//! [`ConfigResolver::resolve`] re-reads that snapshot on every call and never
//! caches, so swapping the [`ConfigSource`] is all a test needs to do.

use std::collections::HashMap;
use std::sync::Arc;

use contact_relay_channel::DEFAULT_ENDPOINT_BASE;

use crate::types::{DISPLAY_PLACEHOLDER, DestinationConfig, ENDPOINT_PLACEHOLDER, ExecutionMode};

/// Comma-delimited endpoint identifiers.
pub const KEY_FORM_IDS: &str = "CONTACT_RELAY_FORM_IDS";
/// Legacy single endpoint identifier.
pub const KEY_FORM_ID: &str = "CONTACT_RELAY_FORM_ID";
/// Comma-delimited display addresses.
pub const KEY_EMAILS: &str = "CONTACT_RELAY_EMAILS";
/// Legacy single display address.
pub const KEY_EMAIL: &str = "CONTACT_RELAY_EMAIL";
/// Execution mode; `development` enables diagnostics.
pub const KEY_ENV: &str = "CONTACT_RELAY_ENV";
/// Base URL for the per-destination URL template.
pub const KEY_ENDPOINT_BASE: &str = "CONTACT_RELAY_ENDPOINT_BASE";

const LIST_DELIMITER: char = ',';

/// Read-only key → string lookup.
pub trait ConfigSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Snapshot of the process environment, taken once.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    /// Capture the current process environment.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Override one key in the snapshot (command-line flags).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// In-memory configuration, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Turns the raw configuration snapshot into a [`DestinationConfig`].
#[derive(Clone)]
pub struct ConfigResolver {
    source: Arc<dyn ConfigSource>,
}

impl ConfigResolver {
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self { source }
    }

    /// Resolve endpoint identifiers and display addresses.
    ///
    /// Each list is resolved independently: delimited key, then legacy single
    /// key, then the placeholder. In development mode an unconfigured result is
    /// reported through the log; nothing else is affected.
    pub fn resolve(&self) -> DestinationConfig {
        let endpoints = self.resolve_list(KEY_FORM_IDS, KEY_FORM_ID, ENDPOINT_PLACEHOLDER);
        let display_addresses = self.resolve_list(KEY_EMAILS, KEY_EMAIL, DISPLAY_PLACEHOLDER);
        let endpoint_base = self
            .source
            .get(KEY_ENDPOINT_BASE)
            .map(|base| base.trim().to_string())
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT_BASE.to_string());

        let config = DestinationConfig {
            endpoints,
            display_addresses,
            endpoint_base,
        };

        if self.mode().diagnostics_enabled() {
            report_diagnostics(&config);
        }
        config
    }

    /// Execution mode of the current snapshot.
    pub fn mode(&self) -> ExecutionMode {
        ExecutionMode::from_raw(self.source.get(KEY_ENV).as_deref())
    }

    fn resolve_list(&self, plural_key: &str, singular_key: &str, placeholder: &str) -> Vec<String> {
        if let Some(raw) = self.source.get(plural_key).filter(|v| !v.is_empty()) {
            return split_list(&raw);
        }
        if let Some(single) = self.source.get(singular_key).filter(|v| !v.is_empty()) {
            return vec![single];
        }
        vec![placeholder.to_string()]
    }
}

/// Split a delimited value and trim each element. Empty elements are kept so
/// the validity check can see them.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_DELIMITER)
        .map(|item| item.trim().to_string())
        .collect()
}

fn report_diagnostics(config: &DestinationConfig) {
    if !config.endpoints_configured() {
        log::warn!(
            "Contact forms not configured: set {KEY_FORM_IDS} (comma-separated) in the environment"
        );
    }
    if !config.display_configured() {
        log::warn!(
            "Contact emails not configured: set {KEY_EMAILS} (comma-separated) in the environment"
        );
    }
    log::info!("Configured emails: {}", config.tracking_addresses());
    log::info!("Configured form IDs: {}", config.endpoints.join(", "));
}
