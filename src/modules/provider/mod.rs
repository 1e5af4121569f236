pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access - only export what's actually used
pub use domain::{
    AccessToken, GeoOperation, GeoPoint, ProviderConfig, ProviderFailure, ProviderKind,
    ProviderResult, ReverseLocation, RouteSummary,
};
pub use infrastructure::{create_provider, TokenManager};
pub use traits::GeoProviderClient;
