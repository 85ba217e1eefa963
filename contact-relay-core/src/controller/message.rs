//! 表单消息定义

use crate::services::ComposeTarget;
use crate::types::InquiryCategory;

/// Everything the host can ask the form to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    EditEmail(String),              // 修改发件人邮箱
    EditCategory(InquiryCategory),  // 修改咨询类别
    EditMessage(String),            // 修改留言
    Submit,                         // 提交
    RequestFallback,                // 请求通过邮件客户端发送
}

/// What the host has to do after a message was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    /// 无需额外操作
    None,
    /// Submit was accepted; the host must drive [`FormController::submit`](super::FormController::submit).
    Dispatch,
    /// Open the user's mail client with this compose request.
    OpenCompose(ComposeTarget),
}
