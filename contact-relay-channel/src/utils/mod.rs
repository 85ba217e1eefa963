//! Utility modules.

/// Log sanitization helpers so submitted messages are never logged in full.
pub mod log_sanitizer;
