//! 咨询类别相关类型定义

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Prefix shared by every derived subject line.
pub const SUBJECT_PREFIX: &str = "M3 Contact: ";

/// Inquiry category picked in the "How can we help?" selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryCategory {
    /// Hospital / EHR integration request
    #[default]
    Hospital,
    /// Suggestions and feedback
    Suggestions,
    /// Anything else
    General,
}

impl InquiryCategory {
    /// Every category, in selector order.
    pub const ALL: [Self; 3] = [Self::Hospital, Self::Suggestions, Self::General];

    /// Wire value sent as `inquiryType`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hospital => "hospital",
            Self::Suggestions => "suggestions",
            Self::General => "general",
        }
    }

    /// Label shown in the selector.
    pub fn menu_label(self) -> &'static str {
        match self {
            Self::Hospital => "🏥 Hospital/EHR MCP Request",
            Self::Suggestions => "💡 Suggestions & Feedback",
            Self::General => "📧 General Contact",
        }
    }

    /// Label used in the subject line.
    pub fn subject_label(self) -> &'static str {
        match self {
            Self::Hospital => "Hospital/EHR MCP Request",
            Self::Suggestions => "Suggestions",
            Self::General => "General Contact",
        }
    }

    /// Full subject line, e.g. `M3 Contact: Suggestions`.
    pub fn subject(self) -> String {
        format!("{SUBJECT_PREFIX}{}", self.subject_label())
    }
}

impl fmt::Display for InquiryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hospital" => Ok(Self::Hospital),
            "suggestions" => Ok(Self::Suggestions),
            "general" => Ok(Self::General),
            other => Err(CoreError::ValidationError(format!(
                "Unknown inquiry category: {other}"
            ))),
        }
    }
}
