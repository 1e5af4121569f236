pub mod failure;
pub mod provider_config;
pub mod value_objects;

// Re-exports for easy access
pub use failure::{ProviderFailure, ProviderResult};
pub use provider_config::{GeoOperation, ProviderConfig};
pub use value_objects::{AccessToken, GeoPoint, ProviderKind, ReverseLocation, RouteSummary};
