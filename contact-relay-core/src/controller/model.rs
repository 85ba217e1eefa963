//! 表单状态模型

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::types::{DispatchOutcome, InquiryCategory};

const STATUS_SUBMITTING: &str = "Sending...";
const STATUS_SUCCEEDED: &str = "Message sent successfully! We'll get back to you soon.";
const STATUS_FAILED: &str = "Failed to send message. Please try again or send via email.";

/// 表单输入字段
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    /// 发件人邮箱
    pub email: String,
    /// 咨询类别
    pub category: InquiryCategory,
    /// 留言内容（可为空）
    pub message: String,
}

/// Visible state of the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// 表单主状态
#[derive(Debug, Default)]
pub struct FormModel {
    /// 当前输入
    pub fields: FormFields,

    /// 当前状态
    pub state: FormState,

    /// 最近一次分发结果（成功或全部失败时均保留）
    pub last_outcome: Option<DispatchOutcome>,

    /// 最近一次失败原因
    pub last_error: Option<CoreError>,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit is possible when nothing is in flight and a sender address is present.
    pub fn can_submit(&self) -> bool {
        self.state != FormState::Submitting && !self.fields.email.trim().is_empty()
    }

    /// Status line shown under the form; idle shows nothing.
    pub fn status_text(&self) -> Option<&'static str> {
        match self.state {
            FormState::Idle => None,
            FormState::Submitting => Some(STATUS_SUBMITTING),
            FormState::Succeeded => Some(STATUS_SUCCEEDED),
            FormState::Failed => Some(STATUS_FAILED),
        }
    }

    /// Fallback compose is offered only after a failed delivery attempt.
    pub fn offers_fallback(&self) -> bool {
        self.state == FormState::Failed
            && self
                .last_error
                .as_ref()
                .is_some_and(CoreError::is_submission_failure)
    }

    /// 应用一次提交的结果
    ///
    /// Success resets the fields. Configuration and aggregate failures keep
    /// them and land in `Failed`; any other error means nothing was attempted,
    /// so the form goes back to `Idle` with the error kept for display.
    pub(super) fn settle(&mut self, result: CoreResult<DispatchOutcome>) {
        match result {
            Ok(outcome) => {
                self.fields = FormFields::default();
                self.last_outcome = Some(outcome);
                self.state = FormState::Succeeded;
            }
            Err(e) => {
                if let CoreError::AggregateFailure(outcome) = &e {
                    self.last_outcome = Some(outcome.clone());
                }
                self.state = if e.is_submission_failure() {
                    FormState::Failed
                } else {
                    FormState::Idle
                };
                self.last_error = Some(e);
            }
        }
    }

    /// 编辑字段前调用：清除上一次的提交状态
    pub(super) fn clear_status(&mut self) {
        if matches!(self.state, FormState::Succeeded | FormState::Failed) {
            self.state = FormState::Idle;
            self.last_outcome = None;
            self.last_error = None;
        }
    }
}
