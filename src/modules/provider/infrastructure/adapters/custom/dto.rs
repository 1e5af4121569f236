//! Wire types for the token-authenticated custom geocoding endpoint.

use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct CustomGeocodeResponse {
    pub result: Option<CustomGeocodeResult>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CustomGeocodeResult {
    /// "OK" on success; anything else is a provider-side refusal.
    pub status: Option<String>,
    pub geometry: Option<CustomGeometry>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CustomGeometry {
    pub location: Option<CustomLocation>,
}

#[derive(Debug, Deserialize, Default, Clone, Copy)]
pub struct CustomLocation {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}
