//! Formspree 响应类型

use serde::Deserialize;

/// Rejection body returned by the endpoint: either a single `error` or a list
/// of field `errors`. Unknown fields (`ok`, `next`) are ignored.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FormspreeResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Vec<FormspreeFieldError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FormspreeFieldError {
    #[serde(default)]
    pub field: Option<String>,
    pub message: String,
}

impl FormspreeResponse {
    /// Human-readable rejection reason, if the body carried one.
    pub fn rejection_message(&self) -> Option<String> {
        if let Some(error) = &self.error {
            return Some(error.clone());
        }
        if self.errors.is_empty() {
            return None;
        }
        let joined = self
            .errors
            .iter()
            .map(|e| match &e.field {
                Some(field) => format!("{field} {}", e.message),
                None => e.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ");
        Some(joined)
    }
}
