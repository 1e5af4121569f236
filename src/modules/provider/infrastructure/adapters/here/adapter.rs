//! HERE provider adapter
//!
//! Key-based adapter over the HERE geocode/revgeocode/router APIs that
//! implements the same interface as the Mapbox adapter with HERE's
//! response shapes.

use async_trait::async_trait;

use crate::modules::provider::domain::{
    GeoPoint, ProviderFailure, ProviderKind, ProviderResult, ReverseLocation, RouteSummary,
};
use crate::modules::provider::infrastructure::http::HttpClient;
use crate::modules::provider::traits::GeoProviderClient;
use crate::shared::errors::AppResult;

use super::super::common::{require_address, require_finite};
use super::dto::{HereGeocodeResponse, HereItem, HereRouteResponse};
use super::mapper::HereMapper;

const GEOCODE_URL: &str = "https://geocode.search.hereapi.com/v1/geocode";
const REVGEOCODE_URL: &str = "https://revgeocode.search.hereapi.com/v1/revgeocode";
const ROUTER_URL: &str = "https://router.hereapi.com/v8/routes";

pub struct HereAdapter {
    http: HttpClient,
    api_key: String,
}

impl HereAdapter {
    pub fn new(api_key: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            http: HttpClient::new()?,
            api_key: api_key.into(),
        })
    }

    async fn fetch(&self, url: &str) -> ProviderResult<(bool, String)> {
        match self.http.get_text(url).await {
            Ok((status, body)) => Ok((status.is_success(), body)),
            Err(e) => Err(ProviderFailure::network(url, e.to_string())),
        }
    }

    /// Both lookup endpoints answer with an `items` array; take the first.
    async fn fetch_first_item(&self, url: &str) -> ProviderResult<HereItem> {
        let (ok, body) = self.fetch(url).await?;
        if !ok {
            return Err(ProviderFailure::no_result(url, body));
        }

        let response: HereGeocodeResponse =
            serde_json::from_str(&body).map_err(|_| ProviderFailure::no_result(url, &body))?;

        response
            .items
            .into_iter()
            .next()
            .ok_or_else(|| ProviderFailure::no_result(url, body))
    }
}

#[async_trait]
impl GeoProviderClient for HereAdapter {
    fn provider_kind(&self) -> ProviderKind {
        ProviderKind::Here
    }

    async fn geocode(&self, address: &str) -> ProviderResult<GeoPoint> {
        let address = require_address(address, "geocode")?;
        let url = format!(
            "{}?q={}&apiKey={}",
            GEOCODE_URL,
            urlencoding::encode(address),
            self.api_key
        );

        log::debug!("HERE: geocoding '{}'", address);
        let item = self.fetch_first_item(&url).await?;

        let position = item
            .position
            .ok_or_else(|| ProviderFailure::no_result(&url, "item has no position"))?;
        Ok(GeoPoint::new(position.lat, position.lng))
    }

    async fn reverse_geocode(&self, lat: f64, lng: f64) -> ProviderResult<ReverseLocation> {
        let point = require_finite(lat, lng, "reverse")?;
        let url = format!(
            "{}?at={},{}&lang=zh-CN&apiKey={}",
            REVGEOCODE_URL, point.lat, point.lng, self.api_key
        );

        log::debug!("HERE: reverse geocoding {}", point);
        let item = self.fetch_first_item(&url).await?;

        Ok(HereMapper::to_location(&item))
    }

    async fn route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> ProviderResult<RouteSummary> {
        let origin = require_finite(origin.lat, origin.lng, "route")?;
        let destination = require_finite(destination.lat, destination.lng, "route")?;
        let url = format!(
            "{}?transportMode=car&origin={},{}&destination={},{}&return=summary&apiKey={}",
            ROUTER_URL, origin.lat, origin.lng, destination.lat, destination.lng, self.api_key
        );

        log::debug!("HERE: routing {} -> {}", origin, destination);
        let (ok, body) = self.fetch(&url).await?;
        if !ok {
            return Err(ProviderFailure::no_result(&url, body));
        }

        let response: HereRouteResponse =
            serde_json::from_str(&body).map_err(|_| ProviderFailure::no_result(&url, &body))?;

        let summary = response
            .routes
            .into_iter()
            .next()
            .and_then(|route| route.sections.into_iter().next())
            .and_then(|section| section.summary)
            .ok_or_else(|| ProviderFailure::no_result(&url, body))?;

        Ok(RouteSummary::from_metric(summary.length, summary.duration))
    }
}
