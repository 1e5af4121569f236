use serde::{Deserialize, Serialize};

use crate::modules::provider::domain::{GeoOperation, ProviderConfig};

use super::coordinate::CoordinateFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchMode {
    Geocode,
    Reverse,
    Route,
}

impl BatchMode {
    /// The provider capability this mode relies on.
    pub fn operation(&self) -> GeoOperation {
        match self {
            BatchMode::Geocode => GeoOperation::Geocode,
            BatchMode::Reverse => GeoOperation::ReverseGeocode,
            BatchMode::Route => GeoOperation::Route,
        }
    }
}

impl std::fmt::Display for BatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BatchMode::Geocode => "geocode",
            BatchMode::Reverse => "reverse",
            BatchMode::Route => "route",
        };
        write!(f, "{}", name)
    }
}

/// Whether route legs arrive as addresses (geocoded first) or as
/// coordinate strings (parsed locally).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteInputMode {
    Address,
    Coordinate,
}

impl Default for RouteInputMode {
    fn default() -> Self {
        Self::Address
    }
}

/// One row of batch input. The shape is mode-dependent: a bare string is
/// an address (geocode) or a coordinate string (reverse, single-column);
/// the pair forms carry reverse split columns and route legs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchItem {
    Route { origin: String, destination: String },
    Pair { lat: String, lng: String },
    Value(String),
}

impl BatchItem {
    /// Human-readable label identifying this item in logs and outcomes.
    pub fn subject(&self) -> String {
        match self {
            BatchItem::Value(value) => value.clone(),
            BatchItem::Pair { lat, lng } => format!("{},{}", lat, lng),
            BatchItem::Route {
                origin,
                destination,
            } => format!("{} -> {}", origin, destination),
        }
    }
}

/// Everything one batch run needs. Immutable once submitted; the
/// orchestrator owns it for the batch's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    pub mode: BatchMode,
    #[serde(default)]
    pub route_input_mode: RouteInputMode,
    #[serde(default)]
    pub coordinate_format: CoordinateFormat,
    pub config: ProviderConfig,
    #[serde(default)]
    pub items: Vec<BatchItem>,
}

/// The one message a caller sends to start a batch.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum InboundMessage {
    Start { payload: BatchRequest },
}

impl BatchRequest {
    /// Decode a raw start message. Anything that does not parse into a
    /// well-formed start payload is reported back as a single
    /// parse-error progress message by the caller.
    pub fn decode_start(text: &str) -> Result<BatchRequest, serde_json::Error> {
        let InboundMessage::Start { payload } = serde_json::from_str(text)?;
        Ok(payload)
    }
}
