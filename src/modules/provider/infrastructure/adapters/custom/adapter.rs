//! Custom provider adapter
//!
//! Token-authenticated geocoding-only adapter. Reverse geocoding and
//! routing fall through to the trait's unsupported-operation errors;
//! batch pre-flight validation rejects those modes before dispatch.

use async_trait::async_trait;
use serde_json::json;

use crate::modules::provider::domain::{
    AccessToken, GeoPoint, ProviderFailure, ProviderKind, ProviderResult,
};
use crate::modules::provider::infrastructure::http::HttpClient;
use crate::modules::provider::traits::GeoProviderClient;
use crate::shared::errors::AppResult;

use super::super::common::require_address;
use super::dto::CustomGeocodeResponse;

/// Embedded status value the endpoint uses for a successful lookup.
const GEOCODE_SUCCESS_STATUS: &str = "OK";

pub struct CustomAdapter {
    http: HttpClient,
    geocode_url: String,
    token: AccessToken,
}

impl CustomAdapter {
    pub fn new(geocode_url: impl Into<String>, token: AccessToken) -> AppResult<Self> {
        Ok(Self {
            http: HttpClient::new()?,
            geocode_url: geocode_url.into(),
            token,
        })
    }
}

#[async_trait]
impl GeoProviderClient for CustomAdapter {
    fn provider_kind(&self) -> ProviderKind {
        ProviderKind::Custom
    }

    async fn geocode(&self, address: &str) -> ProviderResult<GeoPoint> {
        let address = require_address(address, "geocode")?;
        let url = self.geocode_url.as_str();
        let payload = json!({
            "address": address,
            "language": "en",
            "coordType": "wgs84",
        });

        log::debug!("Custom: geocoding '{}'", address);

        let (status, body) = self
            .http
            .post_json_text(url, &payload, Some(self.token.header_value()))
            .await
            .map_err(|e| ProviderFailure::network(url, e.to_string()))?;

        classify_geocode_response(status.is_success(), url, &body)
    }
}

/// Sort the endpoint's answer into the error taxonomy: an embedded
/// non-"OK" status counts as a provider refusal, a missing location as
/// an empty result.
fn classify_geocode_response(http_ok: bool, url: &str, body: &str) -> ProviderResult<GeoPoint> {
    let response: CustomGeocodeResponse = serde_json::from_str(body).unwrap_or_default();
    let result = response.result.unwrap_or_default();

    if !http_ok || result.status.as_deref() != Some(GEOCODE_SUCCESS_STATUS) {
        return Err(ProviderFailure::network(url, body));
    }

    let location = result
        .geometry
        .and_then(|geometry| geometry.location)
        .ok_or_else(|| ProviderFailure::no_result(url, body))?;

    match (location.lat, location.lng) {
        (Some(lat), Some(lng)) => Ok(GeoPoint::new(lat, lng)),
        _ => Err(ProviderFailure::no_result(url, body)),
    }
}
