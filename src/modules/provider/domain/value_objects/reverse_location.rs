use serde::{Deserialize, Serialize};

/// Result of a reverse-geocoding call, normalized across providers.
///
/// `admin1`..`admin3` hold the administrative hierarchy from broadest
/// (province/state) to narrowest (district/subdistrict); a level the
/// provider did not report is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReverseLocation {
    pub address: String,
    pub admin1: String,
    pub admin2: String,
    pub admin3: String,
}
