//! # contact-relay-channel
//!
//! Delivery channel abstraction for contact-relay. A channel delivers one
//! contact-form submission to one destination endpoint and reports whether the
//! destination accepted it, rejected it, or could not be reached.
//!
//! Destinations are Formspree-compatible JSON form endpoints
//! ([`FormspreeChannel`]).
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls for TLS.
//! - **`native-tls`**: use the platform's native TLS implementation instead.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use contact_relay_channel::{ChannelEndpoint, SubmissionBody, create_channel};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let channel = create_channel(&ChannelEndpoint::new("abc123"), None)?;
//!     let body = SubmissionBody {
//!         email: "a@b.com".to_string(),
//!         inquiry_type: "general".to_string(),
//!         message: "Hello".to_string(),
//!         destination_emails: "team@x.org".to_string(),
//!         subject: "M3 Contact: General Contact".to_string(),
//!     };
//!     match channel.deliver(&body).await {
//!         Ok(delivery) => println!("accepted with HTTP {}", delivery.status),
//!         Err(e) if e.is_rejection() => println!("rejected: {e}"),
//!         Err(e) => println!("unreachable: {e}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! [`ChannelError::Rejected`] means the destination answered and declined.
//! Every other variant means the request did not complete. Nothing is retried.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ChannelError, Result};

pub use factory::create_channel;

pub use traits::DeliveryChannel;

pub use types::{ChannelEndpoint, DEFAULT_ENDPOINT_BASE, Delivery, SubmissionBody};

pub use http_client::create_http_client;

pub use utils::log_sanitizer;

pub use providers::FormspreeChannel;
