//! Wire types for the HERE geocoding, reverse geocoding and routing APIs.

use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct HereGeocodeResponse {
    #[serde(default)]
    pub items: Vec<HereItem>,
}

#[derive(Debug, Deserialize, Default)]
pub struct HereItem {
    #[serde(default)]
    pub title: String,
    pub position: Option<HerePosition>,
    #[serde(default)]
    pub address: HereAddress,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct HerePosition {
    pub lat: f64,
    pub lng: f64,
}

/// HERE names the admin levels differently per region; each level has a
/// primary and an alternate field.
#[derive(Debug, Deserialize, Default)]
pub struct HereAddress {
    pub state: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub district: Option<String>,
    pub subdistrict: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct HereRouteResponse {
    #[serde(default)]
    pub routes: Vec<HereRoute>,
}

#[derive(Debug, Deserialize, Default)]
pub struct HereRoute {
    #[serde(default)]
    pub sections: Vec<HereSection>,
}

#[derive(Debug, Deserialize, Default)]
pub struct HereSection {
    pub summary: Option<HereSummary>,
}

#[derive(Debug, Deserialize, Default, Clone, Copy)]
pub struct HereSummary {
    /// Meters
    #[serde(default)]
    pub length: f64,
    /// Seconds
    #[serde(default)]
    pub duration: f64,
}
