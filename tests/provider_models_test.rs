//! Deserialization of real-shaped provider payloads into the wire DTOs,
//! and their mapping into the normalized domain values.

use geofill::modules::provider::infrastructure::adapters::here::dto::{
    HereGeocodeResponse, HereRouteResponse,
};
use geofill::modules::provider::infrastructure::adapters::here::mapper::HereMapper;
use geofill::modules::provider::infrastructure::adapters::mapbox::dto::{
    MapboxDirectionsResponse, MapboxGeocodeResponse,
};
use geofill::modules::provider::infrastructure::adapters::mapbox::mapper::MapboxMapper;
use geofill::RouteSummary;

#[test]
fn test_mapbox_center_order_is_flipped() {
    let json = r#"{
        "features": [
            {"center": [116.397, 39.909], "place_name": "Tiananmen Square, Beijing, China"}
        ]
    }"#;

    let response: MapboxGeocodeResponse = serde_json::from_str(json).unwrap();
    let point = MapboxMapper::center_to_point(&response.features[0].center).unwrap();

    // Mapbox answers [lng, lat]; the engine works in (lat, lng).
    assert_eq!(point.lat, 39.909);
    assert_eq!(point.lng, 116.397);
}

#[test]
fn test_mapbox_empty_features_deserializes() {
    let response: MapboxGeocodeResponse = serde_json::from_str(r#"{"features": []}"#).unwrap();
    assert!(response.features.is_empty());

    let response: MapboxGeocodeResponse = serde_json::from_str("{}").unwrap();
    assert!(response.features.is_empty());
}

#[test]
fn test_mapbox_reverse_context_mapping() {
    let json = r#"{
        "features": [{
            "center": [116.4, 39.9],
            "place_name": "Chaoyang, Beijing, China",
            "context": [
                {"id": "region.123", "text": "Beijing"},
                {"id": "place.45", "text": "Chaoyang"}
            ]
        }]
    }"#;

    let response: MapboxGeocodeResponse = serde_json::from_str(json).unwrap();
    let location = MapboxMapper::to_location(&response.features[0]);

    assert_eq!(location.address, "Chaoyang, Beijing, China");
    assert_eq!(location.admin1, "Beijing");
    assert_eq!(location.admin2, "Chaoyang");
    assert_eq!(location.admin3, "Chaoyang");
}

#[test]
fn test_mapbox_route_normalization() {
    let json = r#"{"routes": [{"distance": 12345.0, "duration": 725.0}]}"#;
    let response: MapboxDirectionsResponse = serde_json::from_str(json).unwrap();
    let route = &response.routes[0];

    let summary = RouteSummary::from_metric(route.distance, route.duration);
    assert_eq!(summary.distance_km, "12.35");
    assert_eq!(summary.duration_min, "12");
}

#[test]
fn test_here_geocode_position() {
    let json = r#"{"items": [{"title": "Berlin", "position": {"lat": 52.52, "lng": 13.405}}]}"#;
    let response: HereGeocodeResponse = serde_json::from_str(json).unwrap();
    let position = response.items[0].position.unwrap();

    assert_eq!(position.lat, 52.52);
    assert_eq!(position.lng, 13.405);
}

#[test]
fn test_here_reverse_address_fallbacks() {
    let json = r#"{
        "items": [{
            "title": "Some Road, Hsinchu",
            "address": {
                "province": "Taiwan",
                "county": "Hsinchu County",
                "subdistrict": "Zhubei"
            }
        }]
    }"#;

    let response: HereGeocodeResponse = serde_json::from_str(json).unwrap();
    let location = HereMapper::to_location(&response.items[0]);

    assert_eq!(location.admin1, "Taiwan");
    assert_eq!(location.admin2, "Hsinchu County");
    assert_eq!(location.admin3, "Zhubei");
}

#[test]
fn test_here_route_summary_path() {
    let json = r#"{
        "routes": [{
            "sections": [{"summary": {"length": 8000.0, "duration": 645.0}}]
        }]
    }"#;

    let response: HereRouteResponse = serde_json::from_str(json).unwrap();
    let summary = response.routes[0].sections[0].summary.unwrap();

    let normalized = RouteSummary::from_metric(summary.length, summary.duration);
    assert_eq!(normalized.distance_km, "8.00");
    assert_eq!(normalized.duration_min, "11");
}

#[test]
fn test_here_missing_sections_deserialize() {
    let response: HereRouteResponse = serde_json::from_str(r#"{"routes": []}"#).unwrap();
    assert!(response.routes.is_empty());

    let response: HereRouteResponse =
        serde_json::from_str(r#"{"routes": [{"sections": []}]}"#).unwrap();
    assert!(response.routes[0].sections.is_empty());
}
