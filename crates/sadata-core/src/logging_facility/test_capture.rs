//! In-memory capture of operation log events for tests
//!
//! Every event emitted by the `log_op_*` macros is reduced to the fields
//! the query layer correlates on: operation, lifecycle event, request id
//! and error code. All remaining fields (`duration_ms`, `resource`,
//! `message`, ...) stay available by name.
//!
//! Tests in one binary share a single buffer, so select events by a
//! unique op name or a fresh [`RequestId`].

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::core_types::schema::{FIELD_ERR_CODE, FIELD_EVENT, FIELD_OP, FIELD_REQUEST_ID};
use crate::core_types::RequestId;

/// One captured log event
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub op: Option<String>,
    /// Lifecycle marker: `start`, `end` or `end_error`
    pub event: Option<String>,
    pub request_id: Option<String>,
    /// Stable error code on `end_error` events
    pub err_code: Option<String>,
    /// Every other field, keyed by name
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    fn from_fields(level: Level, mut fields: BTreeMap<String, String>) -> Self {
        Self {
            level,
            op: fields.remove(FIELD_OP),
            event: fields.remove(FIELD_EVENT),
            request_id: fields.remove(FIELD_REQUEST_ID),
            err_code: fields.remove(FIELD_ERR_CODE),
            fields,
        }
    }

    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(event)
    }
}

struct FieldRecorder(BTreeMap<String, String>);

impl Visit for FieldRecorder {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

struct CaptureLayer {
    sink: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut recorder = FieldRecorder(BTreeMap::new());
        event.record(&mut recorder);
        let captured = CapturedEvent::from_fields(*event.metadata().level(), recorder.0);

        if let Ok(mut sink) = self.sink.lock() {
            sink.push(captured);
        }
    }
}

/// Read handle on the shared capture buffer
#[derive(Clone)]
pub struct TestCapture {
    sink: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.sink.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn events_for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.select(|e| e.op.as_deref() == Some(op))
    }

    /// Events logged while serving one request, in emission order
    pub fn events_for_request(&self, request_id: &RequestId) -> Vec<CapturedEvent> {
        self.select(|e| e.request_id.as_deref() == Some(request_id.as_str()))
    }

    /// Lifecycle markers of `op` for one request, e.g. `["start", "end"]`
    pub fn lifecycle(&self, op: &str, request_id: &RequestId) -> Vec<String> {
        self.events_for_request(request_id)
            .into_iter()
            .filter(|e| e.op.as_deref() == Some(op))
            .filter_map(|e| e.event)
            .collect()
    }

    /// # Panics
    ///
    /// No captured event matches `op` and `event`.
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is(op, event)),
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            events.len()
        );
    }

    fn select(&self, keep: impl Fn(&CapturedEvent) -> bool) -> Vec<CapturedEvent> {
        self.events().into_iter().filter(|e| keep(e)).collect()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber (first call only)
/// and return the shared handle.
///
/// ```
/// use sadata_core::logging_facility::test_capture::init_test_capture;
/// use sadata_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_example_op");
/// capture.assert_event_exists("doc_example_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let sink = Arc::new(Mutex::new(Vec::new()));
            let layer = CaptureLayer { sink: sink.clone() };
            tracing_subscriber::registry().with(layer).init();
            TestCapture { sink }
        })
        .clone()
}
