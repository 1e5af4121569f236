use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::provider::domain::{
    GeoPoint, ProviderFailure, ProviderKind, ReverseLocation, RouteSummary,
};
use crate::shared::errors::ErrorKind;

use super::request::{BatchMode, BatchRequest};

/// Why one item failed: the classification, the URL or logical operation
/// attempted, and the raw response body or exception text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEntry {
    pub subject_label: String,
    pub kind: ErrorKind,
    pub request: String,
    pub response_detail: String,
}

/// Mode-specific success payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OutcomePayload {
    Geocoded(GeoPoint),
    Reversed(ReverseLocation),
    Routed {
        summary: RouteSummary,
        origin: Option<GeoPoint>,
        destination: Option<GeoPoint>,
    },
}

/// Tagged per-item result; exactly one variant per item, handled
/// exhaustively at every call site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ItemResult {
    Success(OutcomePayload),
    Failure(ErrorEntry),
}

/// The per-item record reported to the caller. `index` is the item's
/// zero-based position in the submitted sequence and never changes, no
/// matter how many network calls the item needed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub index: usize,
    pub subject: String,
    pub result: ItemResult,
}

impl Outcome {
    pub fn success(index: usize, subject: impl Into<String>, payload: OutcomePayload) -> Self {
        Self {
            index,
            subject: subject.into(),
            result: ItemResult::Success(payload),
        }
    }

    pub fn failure(index: usize, subject: impl Into<String>, failure: ProviderFailure) -> Self {
        let subject = subject.into();
        Self {
            index,
            subject: subject.clone(),
            result: ItemResult::Failure(ErrorEntry {
                subject_label: subject,
                kind: failure.kind,
                request: failure.request,
                response_detail: failure.detail,
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.result, ItemResult::Success(_))
    }
}

/// Counts reported alongside the augmented dataset once a batch is done.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub mode: BatchMode,
    pub provider: ProviderKind,
    pub row_count: usize,
    pub error_count: usize,
    pub completed_at: DateTime<Utc>,
}

/// Everything a finished batch produced: the ordered outcome log plus
/// its summary.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<Outcome>,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn new(request: &BatchRequest, outcomes: Vec<Outcome>) -> Self {
        let error_count = outcomes.iter().filter(|outcome| !outcome.is_success()).count();
        let summary = BatchSummary {
            mode: request.mode,
            provider: request.config.kind,
            row_count: request.items.len(),
            error_count,
            completed_at: Utc::now(),
        };
        Self { outcomes, summary }
    }
}
