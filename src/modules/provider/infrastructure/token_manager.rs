use serde::Deserialize;
use serde_json::json;

use crate::modules::provider::domain::{AccessToken, ProviderConfig};
use crate::shared::errors::AppResult;

use super::http::HttpClient;

/// The custom provider's token exchange reports success through a nested
/// status code carrying this exact (misspelled) marker. It is part of
/// the real wire contract and must match verbatim.
const TOKEN_SUCCESS_MARKER: &str = "SUCESS";

#[derive(Debug, Deserialize, Default)]
struct TokenResponse {
    #[serde(default)]
    status: TokenStatus,
    #[serde(default)]
    result: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct TokenStatus {
    #[serde(rename = "statusCode")]
    status_code: Option<String>,
}

/// Acquires the custom provider's short-lived bearer token.
///
/// Called at most once per batch; the token lives exactly as long as the
/// batch that requested it. Failure is an answer here, not an error:
/// callers turn a `None` into an auth failure on every item and keep the
/// reporting protocol intact.
pub struct TokenManager {
    http: HttpClient,
}

impl TokenManager {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            http: HttpClient::new()?,
        })
    }

    /// POST the app credentials to the configured token endpoint.
    ///
    /// Returns `None` on transport failure, non-success HTTP status, or a
    /// body without the expected success marker.
    pub async fn acquire(&self, config: &ProviderConfig) -> Option<AccessToken> {
        let url = &config.token_url;
        let payload = json!({
            "appId": config.app_id,
            "credential": config.credential,
        });

        log::debug!("TokenManager: requesting token from {}", url);

        let (status, body) = match self.http.post_json_text(url, &payload, None).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("TokenManager: token request failed: {}", e);
                return None;
            }
        };

        match parse_token_response(status.is_success(), &body) {
            Some(value) => {
                log::info!("TokenManager: token acquired");
                Some(AccessToken::new(value))
            }
            None => {
                log::warn!("TokenManager: token endpoint refused the exchange");
                None
            }
        }
    }
}

/// Extract the token value, if the exchange succeeded.
fn parse_token_response(http_ok: bool, body: &str) -> Option<String> {
    if !http_ok {
        return None;
    }

    let response: TokenResponse = serde_json::from_str(body).ok()?;
    if response.status.status_code.as_deref() != Some(TOKEN_SUCCESS_MARKER) {
        return None;
    }

    match response.result {
        Some(token) if !token.is_empty() => Some(token),
        _ => None,
    }
}
