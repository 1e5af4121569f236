//! Wire types for the Mapbox geocoding and directions APIs.

use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct MapboxGeocodeResponse {
    #[serde(default)]
    pub features: Vec<MapboxFeature>,
}

#[derive(Debug, Deserialize, Default)]
pub struct MapboxFeature {
    /// Coordinates in Mapbox order: [longitude, latitude]
    #[serde(default)]
    pub center: Vec<f64>,
    #[serde(default)]
    pub place_name: String,
    #[serde(default)]
    pub context: Vec<MapboxContextEntry>,
}

/// One entry of a feature's administrative context; the `id` prefix
/// (`region`, `place`, `district`, `locality`) tells the level.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MapboxContextEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct MapboxDirectionsResponse {
    #[serde(default)]
    pub routes: Vec<MapboxRoute>,
}

#[derive(Debug, Deserialize, Default)]
pub struct MapboxRoute {
    /// Meters
    #[serde(default)]
    pub distance: f64,
    /// Seconds
    #[serde(default)]
    pub duration: f64,
}
