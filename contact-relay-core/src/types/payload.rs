//! 提交内容相关类型定义

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::types::{DestinationConfig, InquiryCategory, SubmissionBody};

/// What the user entered, frozen at the moment dispatch begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    email: String,
    category: InquiryCategory,
    message: String,
}

impl SubmissionPayload {
    /// Build a payload, rejecting a blank sender address.
    pub fn new(
        email: impl Into<String>,
        category: InquiryCategory,
        message: impl Into<String>,
    ) -> CoreResult<Self> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Email address is required".to_string(),
            ));
        }
        Ok(Self {
            email,
            category,
            message: message.into(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn category(&self) -> InquiryCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Derived subject line.
    pub fn subject(&self) -> String {
        self.category.subject()
    }

    /// JSON body posted to every destination of `config`.
    pub fn to_body(&self, config: &DestinationConfig) -> SubmissionBody {
        SubmissionBody {
            email: self.email.clone(),
            inquiry_type: self.category.as_str().to_string(),
            message: self.message.clone(),
            destination_emails: config.tracking_addresses(),
            subject: self.subject(),
        }
    }
}
