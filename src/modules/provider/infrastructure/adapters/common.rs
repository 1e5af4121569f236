//! Input validation shared by all provider adapters.
//!
//! Invalid input short-circuits before any network call is issued.

use crate::modules::provider::domain::{GeoPoint, ProviderFailure, ProviderResult};

/// A geocodable address must be non-blank.
pub fn require_address<'a>(address: &'a str, operation: &str) -> ProviderResult<&'a str> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(ProviderFailure::empty_input(operation, "address is blank"));
    }
    Ok(trimmed)
}

/// Coordinates handed to a provider must be finite numbers.
pub fn require_finite(lat: f64, lng: f64, operation: &str) -> ProviderResult<GeoPoint> {
    let point = GeoPoint::new(lat, lng);
    if !point.is_finite() {
        return Err(ProviderFailure::invalid_coord(
            operation,
            format!("coordinates are not finite numbers: {},{}", lat, lng),
        ));
    }
    Ok(point)
}
