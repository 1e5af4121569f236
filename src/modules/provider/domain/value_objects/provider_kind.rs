use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported geolocation providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Mapbox geocoding/directions APIs - Default provider
    #[serde(rename = "mapbox")]
    Mapbox,
    /// HERE geocoding/routing APIs
    #[serde(rename = "here")]
    Here,
    /// Token-authenticated custom endpoint (geocoding only)
    #[serde(rename = "custom")]
    Custom,
}

impl Default for ProviderKind {
    fn default() -> Self {
        Self::Mapbox
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderKind::Mapbox => "mapbox",
            ProviderKind::Here => "here",
            ProviderKind::Custom => "custom",
        };
        write!(f, "{}", name)
    }
}
