//! Core layer type definitions

mod category;
mod destination;
mod outcome;
mod payload;

pub use category::{InquiryCategory, SUBJECT_PREFIX};
pub use destination::{DISPLAY_PLACEHOLDER, DestinationConfig, ENDPOINT_PLACEHOLDER, ExecutionMode};
pub use outcome::{DestinationResult, DestinationStatus, DispatchOutcome, OverallStatus};
pub use payload::SubmissionPayload;

// Re-export library types
pub use contact_relay_channel::{ChannelEndpoint, Delivery, SubmissionBody};
