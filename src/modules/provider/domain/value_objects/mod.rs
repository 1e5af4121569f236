pub mod access_token;
pub mod geo_point;
pub mod provider_kind;
pub mod reverse_location;
pub mod route_summary;

pub use access_token::AccessToken;
pub use geo_point::GeoPoint;
pub use provider_kind::ProviderKind;
pub use reverse_location::ReverseLocation;
pub use route_summary::RouteSummary;
