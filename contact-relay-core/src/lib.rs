//! Contact Relay Core Library
//!
//! Core logic behind the contact intake form:
//! - Destination resolution from a configuration snapshot (`config`)
//! - Concurrent fan-out delivery with any-one-accepted aggregation (`services`)
//! - The form state machine and its fallback compose action (`controller`)
//!
//! Transport is abstracted through [`ChannelFactory`], so the whole flow runs
//! against in-memory channels in tests.

pub mod config;
pub mod controller;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{ConfigResolver, ConfigSource, EnvSource, MapSource};
pub use controller::{FormController, FormEffect, FormFields, FormMessage, FormModel, FormState};
pub use error::{CoreError, CoreResult};
pub use services::{ComposeTarget, SubmissionDispatcher, compose_fallback};
pub use traits::{ChannelFactory, HttpChannelFactory};
