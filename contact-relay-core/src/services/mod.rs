//! Service layer
//!
//! - [`SubmissionDispatcher`]: concurrent fan-out to every destination
//! - [`compose_fallback`]: network-free `mailto:` hand-off

mod dispatcher;
mod fallback;

pub use dispatcher::SubmissionDispatcher;
pub use fallback::{ComposeTarget, compose_fallback};
