use crate::modules::provider::domain::{GeoPoint, ReverseLocation};

use super::dto::{MapboxContextEntry, MapboxFeature};

pub struct MapboxMapper;

impl MapboxMapper {
    /// Mapbox serializes coordinates as [longitude, latitude]; flip them
    /// into the (lat, lng) order the rest of the engine uses.
    pub fn center_to_point(center: &[f64]) -> Option<GeoPoint> {
        if center.len() < 2 {
            return None;
        }
        Some(GeoPoint::new(center[1], center[0]))
    }

    pub fn to_location(feature: &MapboxFeature) -> ReverseLocation {
        let (admin1, admin2, admin3) = Self::extract_admin(&feature.context);
        ReverseLocation {
            address: feature.place_name.clone(),
            admin1,
            admin2,
            admin3,
        }
    }

    /// Map the context entries onto the uniform admin triple.
    ///
    /// Fallback chains when a level is absent:
    /// admin1 = region, else place; admin2 = place, else locality;
    /// admin3 = district, else locality, else place.
    pub fn extract_admin(context: &[MapboxContextEntry]) -> (String, String, String) {
        let region = Self::context_text(context, "region");
        let place = Self::context_text(context, "place");
        let district = Self::context_text(context, "district");
        let locality = Self::context_text(context, "locality");

        let admin1 = Self::first_of(&[&region, &place]);
        let admin2 = Self::first_of(&[&place, &locality]);
        let admin3 = Self::first_of(&[&district, &locality, &place]);

        (admin1, admin2, admin3)
    }

    fn context_text(context: &[MapboxContextEntry], prefix: &str) -> String {
        context
            .iter()
            .find(|entry| entry.id.starts_with(prefix))
            .map(|entry| entry.text.clone())
            .unwrap_or_default()
    }

    fn first_of(candidates: &[&String]) -> String {
        candidates
            .iter()
            .find(|value| !value.is_empty())
            .map(|value| (*value).clone())
            .unwrap_or_default()
    }
}
