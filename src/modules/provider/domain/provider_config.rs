use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

use super::value_objects::ProviderKind;

/// The operation a batch needs from its provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoOperation {
    Geocode,
    ReverseGeocode,
    Route,
}

impl std::fmt::Display for GeoOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GeoOperation::Geocode => "geocode",
            GeoOperation::ReverseGeocode => "reverse geocode",
            GeoOperation::Route => "route",
        };
        write!(f, "{}", name)
    }
}

/// Provider selection plus the credentials/endpoints it needs.
///
/// For the key-based providers only `api_key` matters. The custom
/// provider ignores `api_key` and instead requires the token endpoint
/// and the endpoint for the requested operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub api_key: String,
    pub app_id: String,
    pub credential: String,
    pub token_url: String,
    pub geocode_url: String,
    pub route_url: String,
}

impl ProviderConfig {
    /// Config for a key-based provider (Mapbox or HERE).
    pub fn with_key(kind: ProviderKind, api_key: impl Into<String>) -> Self {
        Self {
            kind,
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Pre-flight check: can this configuration serve `operation` at all?
    ///
    /// Failing here fails the whole batch before any item is processed;
    /// per-item errors never come from this path.
    pub fn validate_for(&self, operation: GeoOperation) -> AppResult<()> {
        match self.kind {
            ProviderKind::Custom => {
                if operation != GeoOperation::Geocode {
                    return Err(AppError::ConfigError(format!(
                        "the custom provider only supports geocoding, not {}",
                        operation
                    )));
                }
                if self.token_url.trim().is_empty() {
                    return Err(AppError::ConfigError(
                        "custom provider requires a token URL".to_string(),
                    ));
                }
                if self.geocode_url.trim().is_empty() {
                    return Err(AppError::ConfigError(
                        "custom provider requires a geocode URL".to_string(),
                    ));
                }
                Ok(())
            }
            _ => {
                if self.api_key.trim().is_empty() {
                    return Err(AppError::ConfigError(format!(
                        "provider {} requires an API key",
                        self.kind
                    )));
                }
                Ok(())
            }
        }
    }
}
