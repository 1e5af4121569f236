pub mod common;
pub mod custom;
pub mod here;
pub mod mapbox;

// Use specific imports to avoid conflicts
pub use custom::CustomAdapter;
pub use here::HereAdapter;
pub use mapbox::MapboxAdapter;

use std::sync::Arc;

use crate::modules::provider::domain::{AccessToken, ProviderConfig, ProviderKind};
use crate::modules::provider::traits::GeoProviderClient;
use crate::shared::errors::{AppError, AppResult};

/// Resolve the configured provider into a concrete adapter, exactly once
/// per batch. The custom provider additionally needs the batch's token.
pub fn create_provider(
    config: &ProviderConfig,
    token: Option<AccessToken>,
) -> AppResult<Arc<dyn GeoProviderClient>> {
    match config.kind {
        ProviderKind::Mapbox => Ok(Arc::new(MapboxAdapter::new(config.api_key.clone())?)),
        ProviderKind::Here => Ok(Arc::new(HereAdapter::new(config.api_key.clone())?)),
        ProviderKind::Custom => {
            let token = token.ok_or_else(|| {
                AppError::ConfigError(
                    "custom provider requires a token before dispatch".to_string(),
                )
            })?;
            Ok(Arc::new(CustomAdapter::new(
                config.geocode_url.clone(),
                token,
            )?))
        }
    }
}
