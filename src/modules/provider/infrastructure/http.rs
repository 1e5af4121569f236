use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

/// Every outbound provider call shares the same fixed timeout. A timed
/// out call is reported like any other transport failure and is never
/// retried.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin shared wrapper over reqwest: one client per batch, raw body
/// passthrough so adapters can classify and log the exact payload.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> AppResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("geofill/0.1")
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// GET a URL, returning the status and the raw response body.
    pub async fn get_text(&self, url: &str) -> Result<(StatusCode, String), reqwest::Error> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    /// POST a JSON body, optionally with an `Authorization` header,
    /// returning the status and the raw response body.
    pub async fn post_json_text(
        &self,
        url: &str,
        body: &Value,
        authorization: Option<&str>,
    ) -> Result<(StatusCode, String), reqwest::Error> {
        let mut request = self.client.post(url).json(body);
        if let Some(token) = authorization {
            request = request.header("Authorization", token);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }
}
