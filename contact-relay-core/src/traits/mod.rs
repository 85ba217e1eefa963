//! Storage and transport abstractions used by the core services

mod channel_factory;

pub use channel_factory::{ChannelFactory, HttpChannelFactory};
