//! Serialization of per-item outcomes onto the caller's reporting channel.
//!
//! The transport itself (websocket, in-process channel, stdout) lives
//! with the caller; the engine only needs a sink that says whether the
//! consumer is still listening.

use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use serde::Serialize;

use crate::modules::batch::domain::{ItemResult, Outcome, OutcomePayload};
use crate::shared::errors::ErrorKind;

/// Destination for progress messages. `send` returns false once the
/// consumer is gone, which tells the orchestrator to stop working.
pub trait ProgressSink: Send + Sync {
    fn send(&self, message: ProgressMessage) -> bool;
}

/// The reporting protocol: one progress message per outcome, then one
/// completion marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProgressMessage {
    Progress { payload: ProgressPayload },
    Complete,
}

/// Flattened wire form of one outcome. Only the fields belonging to the
/// batch's mode (and the error triple on failure) are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPayload {
    pub index: usize,
    /// 1-based running count of handled items
    pub processed: usize,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl ProgressPayload {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        let mut payload = ProgressPayload {
            index: outcome.index,
            processed: outcome.index + 1,
            address: Some(outcome.subject.clone()),
            ..ProgressPayload::default()
        };

        match &outcome.result {
            ItemResult::Success(OutcomePayload::Geocoded(point)) => {
                payload.success = true;
                payload.lat = Some(point.lat);
                payload.lng = Some(point.lng);
            }
            ItemResult::Success(OutcomePayload::Reversed(location)) => {
                payload.success = true;
                payload.resolved_address = Some(location.address.clone());
                payload.admin1 = Some(location.admin1.clone());
                payload.admin2 = Some(location.admin2.clone());
                payload.admin3 = Some(location.admin3.clone());
            }
            ItemResult::Success(OutcomePayload::Routed {
                summary,
                origin,
                destination,
            }) => {
                payload.success = true;
                payload.distance_km = Some(summary.distance_km.clone());
                payload.duration_min = Some(summary.duration_min.clone());
                payload.origin_lat = origin.map(|point| point.lat);
                payload.origin_lng = origin.map(|point| point.lng);
                payload.destination_lat = destination.map(|point| point.lat);
                payload.destination_lng = destination.map(|point| point.lng);
            }
            ItemResult::Failure(entry) => {
                payload.success = false;
                payload.error_type = Some(entry.kind);
                payload.request = Some(entry.request.clone());
                payload.response = Some(entry.response_detail.clone());
            }
        }

        payload
    }

    /// The single message sent back when the inbound start message could
    /// not be decoded.
    pub fn parse_error(detail: impl Into<String>) -> Self {
        ProgressPayload {
            error_type: Some(ErrorKind::ParseError),
            request: Some("start".to_string()),
            response: Some(detail.into()),
            ..ProgressPayload::default()
        }
    }
}

/// Pushes outcome and completion messages into the sink.
pub struct ProgressEmitter {
    sink: Arc<dyn ProgressSink>,
}

impl ProgressEmitter {
    pub fn new(sink: Arc<dyn ProgressSink>) -> Self {
        Self { sink }
    }

    pub fn emit_outcome(&self, outcome: &Outcome) -> bool {
        self.sink.send(ProgressMessage::Progress {
            payload: ProgressPayload::from_outcome(outcome),
        })
    }

    pub fn emit_parse_error(&self, detail: impl Into<String>) -> bool {
        self.sink.send(ProgressMessage::Progress {
            payload: ProgressPayload::parse_error(detail),
        })
    }

    pub fn emit_complete(&self) -> bool {
        self.sink.send(ProgressMessage::Complete)
    }
}

/// Sink over an in-process tokio channel.
impl ProgressSink for tokio::sync::mpsc::UnboundedSender<ProgressMessage> {
    fn send(&self, message: ProgressMessage) -> bool {
        tokio::sync::mpsc::UnboundedSender::send(self, message).is_ok()
    }
}

/// Sink writing one JSON line per message, e.g. to stdout.
pub struct JsonLineSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLineSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> ProgressSink for JsonLineSink<W> {
    fn send(&self, message: ProgressMessage) -> bool {
        let line = match serde_json::to_string(&message) {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to serialize progress message: {}", e);
                return false;
            }
        };

        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(_) => return false,
        };
        writeln!(writer, "{}", line).is_ok()
    }
}

/// Sink that keeps every message in memory; handy for embedding and for
/// asserting on the emitted sequence.
#[derive(Default)]
pub struct BufferSink {
    messages: Mutex<Vec<ProgressMessage>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<ProgressMessage> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl ProgressSink for BufferSink {
    fn send(&self, message: ProgressMessage) -> bool {
        match self.messages.lock() {
            Ok(mut messages) => {
                messages.push(message);
                true
            }
            Err(_) => false,
        }
    }
}
