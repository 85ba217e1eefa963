//! Log sanitization utilities
//!
//! Response bodies from form endpoints may echo the submitted message back.
//! Only a bounded prefix is ever written to debug/error logs.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 200;

/// Truncate a string for safe logging.
///
/// Returns the original string if it fits, otherwise the longest prefix that
/// ends on a char boundary within `TRUNCATE_LIMIT` bytes, followed by a suffix
/// with the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}
