use serde::{Deserialize, Serialize};

/// Driving distance/duration for one route, already formatted for output:
/// kilometers with two decimals and whole minutes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance_km: String,
    pub duration_min: String,
}

impl RouteSummary {
    /// Normalize a provider's native meters/seconds pair.
    pub fn from_metric(distance_meters: f64, duration_seconds: f64) -> Self {
        Self {
            distance_km: format!("{:.2}", distance_meters / 1000.0),
            duration_min: format!("{}", (duration_seconds / 60.0).round() as i64),
        }
    }
}
