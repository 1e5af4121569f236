use async_trait::async_trait;

use super::domain::{
    GeoPoint, ProviderFailure, ProviderKind, ProviderResult, ReverseLocation, RouteSummary,
};

/// One geolocation provider behind a uniform interface.
///
/// The variant is picked once per batch; after that every item goes
/// through the same trait object with no further provider branching.
/// Each call is single-shot: one outbound request, classified as success
/// or a [`ProviderFailure`], never retried.
#[async_trait]
pub trait GeoProviderClient: Send + Sync {
    /// Get the provider kind this client handles
    fn provider_kind(&self) -> ProviderKind;

    /// Resolve an address to a coordinate pair
    async fn geocode(&self, address: &str) -> ProviderResult<GeoPoint>;

    /// Resolve a coordinate pair to an address and admin hierarchy
    /// (optional - not all providers support this)
    async fn reverse_geocode(&self, _lat: f64, _lng: f64) -> ProviderResult<ReverseLocation> {
        Err(ProviderFailure::unsupported(
            self.provider_kind(),
            "reverse geocoding",
        ))
    }

    /// Driving distance/duration between two points
    /// (optional - not all providers support this)
    async fn route(
        &self,
        _origin: GeoPoint,
        _destination: GeoPoint,
    ) -> ProviderResult<RouteSummary> {
        Err(ProviderFailure::unsupported(self.provider_kind(), "routing"))
    }
}
