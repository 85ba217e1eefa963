//! 表单状态更新逻辑
//!
//! `FormController` 是唯一可以修改 [`FormModel`] 的地方。

use std::sync::Arc;

use crate::config::{ConfigResolver, ConfigSource};
use crate::services::{ComposeTarget, SubmissionDispatcher, compose_fallback};
use crate::traits::HttpChannelFactory;
use crate::types::SubmissionPayload;

use super::message::{FormEffect, FormMessage};
use super::model::{FormFields, FormModel, FormState};

/// Drives the intake form through idle → submitting → succeeded / failed.
pub struct FormController {
    resolver: ConfigResolver,
    dispatcher: SubmissionDispatcher,
    model: FormModel,
}

impl FormController {
    pub fn new(resolver: ConfigResolver, dispatcher: SubmissionDispatcher) -> Self {
        Self {
            resolver,
            dispatcher,
            model: FormModel::new(),
        }
    }

    /// Controller delivering over HTTP with configuration read from `source`.
    pub fn from_source(source: Arc<dyn ConfigSource>) -> Self {
        Self::new(
            ConfigResolver::new(source),
            SubmissionDispatcher::new(Arc::new(HttpChannelFactory::new())),
        )
    }

    pub fn model(&self) -> &FormModel {
        &self.model
    }

    pub fn state(&self) -> FormState {
        self.model.state
    }

    pub fn fields(&self) -> &FormFields {
        &self.model.fields
    }

    pub fn can_submit(&self) -> bool {
        self.model.can_submit()
    }

    pub fn status_text(&self) -> Option<&'static str> {
        self.model.status_text()
    }

    /// 处理同步消息
    ///
    /// Edits apply immediately and clear a finished status. `Submit` only
    /// reports whether a dispatch should run; see [`handle`](Self::handle).
    pub fn update(&mut self, msg: FormMessage) -> FormEffect {
        match msg {
            FormMessage::EditEmail(email) => {
                if self.begin_edit() {
                    self.model.fields.email = email;
                }
                FormEffect::None
            }
            FormMessage::EditCategory(category) => {
                if self.begin_edit() {
                    self.model.fields.category = category;
                }
                FormEffect::None
            }
            FormMessage::EditMessage(message) => {
                if self.begin_edit() {
                    self.model.fields.message = message;
                }
                FormEffect::None
            }
            FormMessage::Submit => {
                if self.model.can_submit() {
                    FormEffect::Dispatch
                } else {
                    log::debug!("Submit ignored: state={:?}", self.model.state);
                    FormEffect::None
                }
            }
            FormMessage::RequestFallback => self
                .fallback()
                .map_or(FormEffect::None, FormEffect::OpenCompose),
        }
    }

    /// Route any message, running the dispatch when `Submit` was accepted.
    pub async fn handle(&mut self, msg: FormMessage) -> FormEffect {
        match self.update(msg) {
            FormEffect::Dispatch => {
                self.submit().await;
                FormEffect::None
            }
            effect => effect,
        }
    }

    /// Run the submit transition and return the resulting state.
    ///
    /// Configuration is resolved afresh for every attempt. The state stays
    /// `Submitting` until every destination has settled.
    pub async fn submit(&mut self) -> FormState {
        if !self.model.can_submit() {
            return self.model.state;
        }

        self.model.state = FormState::Submitting;
        self.model.last_outcome = None;
        self.model.last_error = None;

        let config = self.resolver.resolve();
        let fields = &self.model.fields;
        let result =
            match SubmissionPayload::new(fields.email.clone(), fields.category, fields.message.clone())
            {
                Ok(payload) => self.dispatcher.dispatch(&payload, &config).await,
                Err(e) => Err(e),
            };

        match &result {
            Ok(outcome) => log::info!(
                "Form submitted: {} of {} destination(s) accepted",
                outcome.accepted_count(),
                outcome.results.len()
            ),
            Err(e) if e.is_expected() => log::warn!("Form submission failed: {e}"),
            Err(e) => log::error!("Form submission failed: {e}"),
        }
        self.model.settle(result);
        self.model.state
    }

    /// Compose request for the user's own mail client; only offered after a failure.
    pub fn fallback(&self) -> Option<ComposeTarget> {
        if !self.model.offers_fallback() {
            return None;
        }
        let config = self.resolver.resolve();
        let fields = &self.model.fields;
        Some(compose_fallback(
            &config,
            &fields.email,
            fields.category,
            &fields.message,
        ))
    }

    /// 编辑前检查：提交中忽略编辑，结束状态回到 Idle
    fn begin_edit(&mut self) -> bool {
        if self.model.state == FormState::Submitting {
            return false;
        }
        self.model.clear_status();
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{KEY_EMAILS, KEY_FORM_IDS, MapSource};
    use crate::error::CoreError;
    use crate::test_utils::{MockBehavior, MockChannelFactory};
    use crate::types::InquiryCategory;

    fn controller(factory: &Arc<MockChannelFactory>, form_ids: &str) -> FormController {
        let source = MapSource::new()
            .with(KEY_FORM_IDS, form_ids)
            .with(KEY_EMAILS, "team@x.org, ops@x.org");
        FormController::new(
            ConfigResolver::new(Arc::new(source)),
            SubmissionDispatcher::new(factory.clone()),
        )
    }

    fn fill(ctrl: &mut FormController) {
        ctrl.update(FormMessage::EditEmail("a@b.com".to_string()));
        ctrl.update(FormMessage::EditCategory(InquiryCategory::Suggestions));
        ctrl.update(FormMessage::EditMessage("More EHRs".to_string()));
    }

    #[tokio::test]
    async fn success_resets_fields() {
        let factory = Arc::new(MockChannelFactory::new());
        let mut ctrl = controller(&factory, "abc123");
        fill(&mut ctrl);

        assert_eq!(ctrl.submit().await, FormState::Succeeded);
        assert_eq!(ctrl.fields(), &FormFields::default());
        assert!(ctrl.model().last_outcome.is_some());
        assert!(ctrl.fallback().is_none());
    }

    #[tokio::test]
    async fn failure_keeps_fields_and_offers_fallback() {
        let factory = Arc::new(
            MockChannelFactory::new()
                .with("abc123", MockBehavior::Reject(422))
                .with("def456", MockBehavior::Fail),
        );
        let mut ctrl = controller(&factory, "abc123,def456");
        fill(&mut ctrl);

        assert_eq!(ctrl.submit().await, FormState::Failed);
        assert_eq!(ctrl.fields().email, "a@b.com");
        assert_eq!(ctrl.fields().message, "More EHRs");
        assert!(matches!(
            ctrl.model().last_error,
            Some(CoreError::AggregateFailure(_))
        ));
        assert_eq!(ctrl.model().last_outcome.as_ref().unwrap().results.len(), 2);

        let target = ctrl.fallback().unwrap();
        assert_eq!(target.recipients, "team@x.org,ops@x.org");
        assert_eq!(target.subject, "M3 Contact: Suggestions");
    }

    #[tokio::test]
    async fn empty_email_blocks_submit() {
        let factory = Arc::new(MockChannelFactory::new());
        let mut ctrl = controller(&factory, "abc123");

        assert!(!ctrl.can_submit());
        assert_eq!(ctrl.update(FormMessage::Submit), FormEffect::None);
        assert_eq!(ctrl.submit().await, FormState::Idle);
        assert_eq!(factory.call_count(), 0);
    }

    #[tokio::test]
    async fn edit_after_failure_returns_to_idle() {
        let factory = Arc::new(MockChannelFactory::new().with("abc123", MockBehavior::Fail));
        let mut ctrl = controller(&factory, "abc123");
        fill(&mut ctrl);
        ctrl.submit().await;
        assert_eq!(ctrl.state(), FormState::Failed);

        ctrl.update(FormMessage::EditMessage("retry".to_string()));
        assert_eq!(ctrl.state(), FormState::Idle);
        assert_eq!(ctrl.fields().message, "retry");
        assert!(ctrl.model().last_error.is_none());
        assert_eq!(ctrl.status_text(), None);
    }

    #[tokio::test]
    async fn handle_routes_submit_and_fallback() {
        let factory = Arc::new(MockChannelFactory::new().with("abc123", MockBehavior::Reject(500)));
        let mut ctrl = controller(&factory, "abc123");
        fill(&mut ctrl);

        assert_eq!(ctrl.handle(FormMessage::Submit).await, FormEffect::None);
        assert_eq!(ctrl.state(), FormState::Failed);

        match ctrl.handle(FormMessage::RequestFallback).await {
            FormEffect::OpenCompose(target) => {
                assert!(target.uri().starts_with("mailto:team@x.org,ops@x.org?subject="));
            }
            other => panic!("expected compose effect, got {other:?}"),
        }
    }

    #[test]
    fn fallback_not_offered_when_idle() {
        let factory = Arc::new(MockChannelFactory::new());
        let mut ctrl = controller(&factory, "abc123");
        assert_eq!(ctrl.update(FormMessage::RequestFallback), FormEffect::None);
    }

    #[tokio::test]
    async fn configuration_error_is_failed_state() {
        let factory = Arc::new(MockChannelFactory::new());
        let mut ctrl = controller(&factory, "YOUR_FORM_ID");
        fill(&mut ctrl);

        assert_eq!(ctrl.submit().await, FormState::Failed);
        assert!(matches!(
            ctrl.model().last_error,
            Some(CoreError::ConfigurationError(_))
        ));
        assert!(ctrl.model().last_outcome.is_none());
        assert_eq!(factory.call_count(), 0);
    }
}
