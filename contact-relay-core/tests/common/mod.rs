//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use contact_relay_channel::{
    ChannelEndpoint, ChannelError, Delivery, DeliveryChannel, SubmissionBody,
};
use contact_relay_core::config::{KEY_EMAILS, KEY_FORM_IDS};
use contact_relay_core::{
    ChannelFactory, ConfigResolver, CoreResult, FormController, MapSource, SubmissionDispatcher,
};

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// How a scripted destination answers.
#[derive(Debug, Clone, Copy)]
pub enum Script {
    Accept,
    Reject(u16),
    Unreachable,
}

struct ScriptedChannel {
    endpoint_id: String,
    script: Script,
    calls: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<(String, SubmissionBody)>>>,
}

#[async_trait]
impl DeliveryChannel for ScriptedChannel {
    fn name(&self) -> &str {
        "scripted"
    }

    fn endpoint_id(&self) -> &str {
        &self.endpoint_id
    }

    async fn deliver(&self, body: &SubmissionBody) -> contact_relay_channel::Result<Delivery> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bodies
            .lock()
            .unwrap()
            .push((self.endpoint_id.clone(), body.clone()));
        match self.script {
            Script::Accept => Ok(Delivery { status: 200 }),
            Script::Reject(status) => Err(ChannelError::Rejected {
                channel: format!("scripted:{}", self.endpoint_id),
                status,
                raw_message: Some("form disabled".to_string()),
            }),
            Script::Unreachable => Err(ChannelError::NetworkError {
                channel: format!("scripted:{}", self.endpoint_id),
                detail: "connection reset".to_string(),
            }),
        }
    }
}

/// Channel factory answering from a per-endpoint script; unknown endpoints accept.
#[derive(Default)]
pub struct ScriptedFactory {
    scripts: HashMap<String, Script>,
    calls: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<(String, SubmissionBody)>>>,
}

impl ScriptedFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(mut self, endpoint_id: &str, script: Script) -> Self {
        self.scripts.insert(endpoint_id.to_string(), script);
        self
    }

    /// Number of network calls the channels would have made.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(endpoint_id, body)` per call.
    pub fn bodies(&self) -> Vec<(String, SubmissionBody)> {
        self.bodies.lock().unwrap().clone()
    }
}

impl ChannelFactory for ScriptedFactory {
    fn channel_for(&self, endpoint: &ChannelEndpoint) -> CoreResult<Arc<dyn DeliveryChannel>> {
        Ok(Arc::new(ScriptedChannel {
            endpoint_id: endpoint.form_id.clone(),
            script: self
                .scripts
                .get(&endpoint.form_id)
                .copied()
                .unwrap_or(Script::Accept),
            calls: Arc::clone(&self.calls),
            bodies: Arc::clone(&self.bodies),
        }))
    }
}

/// Controller wired to `factory` with the given raw configuration values.
pub fn controller(factory: &Arc<ScriptedFactory>, form_ids: &str, emails: &str) -> FormController {
    let source = MapSource::new()
        .with(KEY_FORM_IDS, form_ids)
        .with(KEY_EMAILS, emails);
    FormController::new(
        ConfigResolver::new(Arc::new(source)),
        SubmissionDispatcher::new(factory.clone()),
    )
}
