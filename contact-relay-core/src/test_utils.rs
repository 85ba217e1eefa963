//! 测试辅助模块
//!
//! 提供 mock 渠道实现和便捷的测试工厂方法。

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use contact_relay_channel::{ChannelEndpoint, ChannelError, Delivery, DeliveryChannel, SubmissionBody};
use tokio::sync::Barrier;

use crate::error::CoreResult;
use crate::traits::ChannelFactory;
use crate::types::{InquiryCategory, SubmissionPayload};

/// How a mock destination settles.
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    Accept,
    Reject(u16),
    Fail,
    DelayedReject(Duration),
}

// ===== MockChannel =====

struct MockChannel {
    name: String,
    endpoint_id: String,
    behavior: MockBehavior,
    calls: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<SubmissionBody>>>,
    barrier: Option<Arc<Barrier>>,
}

#[async_trait]
impl DeliveryChannel for MockChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn endpoint_id(&self) -> &str {
        &self.endpoint_id
    }

    async fn deliver(&self, body: &SubmissionBody) -> contact_relay_channel::Result<Delivery> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut bodies) = self.bodies.lock() {
            bodies.push(body.clone());
        }
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        match self.behavior {
            MockBehavior::Accept => Ok(Delivery { status: 200 }),
            MockBehavior::Reject(status) => Err(ChannelError::Rejected {
                channel: self.name.clone(),
                status,
                raw_message: None,
            }),
            MockBehavior::Fail => Err(ChannelError::NetworkError {
                channel: self.name.clone(),
                detail: "connection refused".to_string(),
            }),
            MockBehavior::DelayedReject(delay) => {
                tokio::time::sleep(delay).await;
                Err(ChannelError::Rejected {
                    channel: self.name.clone(),
                    status: 503,
                    raw_message: None,
                })
            }
        }
    }
}

// ===== MockChannelFactory =====

/// Builds recording mock channels; endpoints without an explicit behavior accept.
pub struct MockChannelFactory {
    behaviors: HashMap<String, MockBehavior>,
    refused: HashSet<String>,
    created: AtomicUsize,
    calls: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<SubmissionBody>>>,
    barrier: Option<Arc<Barrier>>,
}

impl MockChannelFactory {
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
            refused: HashSet::new(),
            created: AtomicUsize::new(0),
            calls: Arc::new(AtomicUsize::new(0)),
            bodies: Arc::new(Mutex::new(Vec::new())),
            barrier: None,
        }
    }

    pub fn with(mut self, endpoint_id: &str, behavior: MockBehavior) -> Self {
        self.behaviors.insert(endpoint_id.to_string(), behavior);
        self
    }

    /// Make `channel_for` fail for this endpoint, as a malformed endpoint would.
    pub fn refuse(mut self, endpoint_id: &str) -> Self {
        self.refused.insert(endpoint_id.to_string());
        self
    }

    /// Every delivery waits until `count` deliveries are in flight at once.
    pub fn with_barrier(mut self, count: usize) -> Self {
        self.barrier = Some(Arc::new(Barrier::new(count)));
        self
    }

    /// Number of `deliver` calls made across all channels.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of channels built.
    pub fn created_count(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// Bodies received, in call order.
    pub fn bodies(&self) -> Vec<SubmissionBody> {
        self.bodies.lock().map(|b| b.clone()).unwrap_or_default()
    }
}

impl ChannelFactory for MockChannelFactory {
    fn channel_for(&self, endpoint: &ChannelEndpoint) -> CoreResult<Arc<dyn DeliveryChannel>> {
        if self.refused.contains(&endpoint.form_id) {
            return Err(ChannelError::InvalidEndpoint {
                channel: format!("mock:{}", endpoint.form_id),
                detail: "refused by test".to_string(),
            }
            .into());
        }
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(MockChannel {
            name: format!("mock:{}", endpoint.form_id),
            endpoint_id: endpoint.form_id.clone(),
            behavior: self
                .behaviors
                .get(&endpoint.form_id)
                .copied()
                .unwrap_or(MockBehavior::Accept),
            calls: Arc::clone(&self.calls),
            bodies: Arc::clone(&self.bodies),
            barrier: self.barrier.clone(),
        }))
    }
}

/// Payload from the canonical scenario: `a@b.com`, hospital, empty message.
pub fn payload() -> SubmissionPayload {
    SubmissionPayload::new("a@b.com", InquiryCategory::Hospital, "")
        .unwrap_or_else(|e| panic!("fixture payload rejected: {e}"))
}

// ===== 日志捕获 =====

thread_local! {
    static CAPTURED_LOGS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Records every `log` record on the emitting thread.
///
/// Each test runs on its own thread (current-thread runtime for
/// `#[tokio::test]`), so captures never mix across tests.
struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        CAPTURED_LOGS.with(|logs| {
            logs.borrow_mut()
                .push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;
static INSTALL_LOGGER: Once = Once::new();

/// Install the capturing logger (once per process) and clear this thread's buffer.
pub fn start_log_capture() {
    INSTALL_LOGGER.call_once(|| {
        if log::set_logger(&CAPTURE_LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
    CAPTURED_LOGS.with(|logs| logs.borrow_mut().clear());
}

/// Drain the records captured on this thread since [`start_log_capture`].
pub fn take_logs() -> Vec<(log::Level, String)> {
    CAPTURED_LOGS.with(|logs| std::mem::take(&mut *logs.borrow_mut()))
}

/// Captured messages at `level`.
pub fn logs_at(logs: &[(log::Level, String)], level: log::Level) -> Vec<&str> {
    logs.iter()
        .filter(|(l, _)| *l == level)
        .map(|(_, msg)| msg.as_str())
        .collect()
}
