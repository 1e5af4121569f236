//! Mapbox provider adapter
//!
//! Key-based adapter over the Mapbox places and directions APIs,
//! covering all three operations.

use async_trait::async_trait;

use crate::modules::provider::domain::{
    GeoPoint, ProviderFailure, ProviderKind, ProviderResult, ReverseLocation, RouteSummary,
};
use crate::modules::provider::infrastructure::http::HttpClient;
use crate::modules::provider::traits::GeoProviderClient;
use crate::shared::errors::AppResult;

use super::super::common::{require_address, require_finite};
use super::dto::{MapboxDirectionsResponse, MapboxGeocodeResponse};
use super::mapper::MapboxMapper;

const PLACES_URL: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";
const DIRECTIONS_URL: &str = "https://api.mapbox.com/directions/v5/mapbox/driving";

pub struct MapboxAdapter {
    http: HttpClient,
    api_key: String,
}

impl MapboxAdapter {
    pub fn new(api_key: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            http: HttpClient::new()?,
            api_key: api_key.into(),
        })
    }

    /// GET a Mapbox URL, folding transport failures into the error log shape.
    async fn fetch(&self, url: &str) -> ProviderResult<(bool, String)> {
        match self.http.get_text(url).await {
            Ok((status, body)) => Ok((status.is_success(), body)),
            Err(e) => Err(ProviderFailure::network(url, e.to_string())),
        }
    }

    /// Shared geocode/reverse handling: both hit the places API and read
    /// the first feature.
    async fn fetch_first_feature(
        &self,
        url: &str,
    ) -> ProviderResult<super::dto::MapboxFeature> {
        let (ok, body) = self.fetch(url).await?;
        if !ok {
            return Err(ProviderFailure::no_result(url, body));
        }

        let response: MapboxGeocodeResponse =
            serde_json::from_str(&body).map_err(|_| ProviderFailure::no_result(url, &body))?;

        response
            .features
            .into_iter()
            .next()
            .ok_or_else(|| ProviderFailure::no_result(url, body))
    }
}

#[async_trait]
impl GeoProviderClient for MapboxAdapter {
    fn provider_kind(&self) -> ProviderKind {
        ProviderKind::Mapbox
    }

    async fn geocode(&self, address: &str) -> ProviderResult<GeoPoint> {
        let address = require_address(address, "geocode")?;
        let url = format!(
            "{}/{}.json?access_token={}",
            PLACES_URL,
            urlencoding::encode(address),
            self.api_key
        );

        log::debug!("Mapbox: geocoding '{}'", address);
        let feature = self.fetch_first_feature(&url).await?;

        MapboxMapper::center_to_point(&feature.center)
            .ok_or_else(|| ProviderFailure::no_result(&url, "feature has no usable center"))
    }

    async fn reverse_geocode(&self, lat: f64, lng: f64) -> ProviderResult<ReverseLocation> {
        let point = require_finite(lat, lng, "reverse")?;
        let url = format!(
            "{}/{},{}.json?access_token={}",
            PLACES_URL, point.lng, point.lat, self.api_key
        );

        log::debug!("Mapbox: reverse geocoding {}", point);
        let feature = self.fetch_first_feature(&url).await?;

        Ok(MapboxMapper::to_location(&feature))
    }

    async fn route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> ProviderResult<RouteSummary> {
        let origin = require_finite(origin.lat, origin.lng, "route")?;
        let destination = require_finite(destination.lat, destination.lng, "route")?;
        let url = format!(
            "{}/{},{};{},{}?geometries=geojson&overview=full&access_token={}",
            DIRECTIONS_URL,
            origin.lng,
            origin.lat,
            destination.lng,
            destination.lat,
            self.api_key
        );

        log::debug!("Mapbox: routing {} -> {}", origin, destination);
        let (ok, body) = self.fetch(&url).await?;
        if !ok {
            return Err(ProviderFailure::no_result(&url, body));
        }

        let response: MapboxDirectionsResponse =
            serde_json::from_str(&body).map_err(|_| ProviderFailure::no_result(&url, &body))?;

        let route = response
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| ProviderFailure::no_result(&url, body))?;

        Ok(RouteSummary::from_metric(route.distance, route.duration))
    }
}
