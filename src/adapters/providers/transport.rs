//! Shared HTTP transport for provider adapters
//!
//! Both providers speak JSON over HTTP with the same error conventions
//! (`{"error": "..."}` bodies, `x-simulate-error` fault injection), so the
//! request/response plumbing lives here and the adapters only deal with
//! field mapping.

use crate::domain::{ProviderName, Result, SitelogError, TransportError};
use reqwest::{Client, ClientBuilder, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Timeout applied to every provider call
pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(5);

/// Header asking a provider to simulate unavailability
pub const SIMULATE_ERROR_HEADER: &str = "x-simulate-error";

/// Error body returned by both providers
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// JSON-over-HTTP client bound to one provider
#[derive(Debug, Clone)]
pub struct HttpTransport {
    provider: ProviderName,
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Create a transport for `provider` rooted at `base_url`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(provider: ProviderName, base_url: &str) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(PROVIDER_TIMEOUT)
            .build()
            .map_err(|e| {
                SitelogError::Configuration(format!(
                    "Failed to build HTTP client for provider {provider}: {e}"
                ))
            })?;

        Ok(Self {
            provider,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST `body` to `path` and decode the JSON response
    pub async fn post<B, R>(&self, path: &str, body: &B, force_error: bool) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(provider = %self.provider, url = %url, force_error, "POST");

        let mut request = self.client.post(&url).json(body);
        if force_error {
            request = request.header(SIMULATE_ERROR_HEADER, "true");
        }

        let response = self.send(request).await?;
        self.decode(response).await
    }

    /// PUT `body` to `path`; the response body is not inspected
    pub async fn put<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(provider = %self.provider, url = %url, "PUT");

        self.send(self.client.put(&url).json(body)).await?;
        Ok(())
    }

    /// GET `path` and decode the JSON response
    pub async fn get<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(provider = %self.provider, url = %url, "GET");

        let response = self.send(self.client.get(&url)).await?;
        self.decode(response).await
    }

    /// Send the request and turn transport failures and error statuses into `TransportError`
    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        let response = request.send().await.map_err(|e| {
            let source = if e.is_timeout() {
                TransportError::Timeout(e.to_string())
            } else {
                TransportError::ConnectionFailed(e.to_string())
            };
            SitelogError::transport(self.provider, source)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);

        Err(SitelogError::transport(
            self.provider,
            TransportError::from_status(status.as_u16(), message),
        ))
    }

    async fn decode<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        response.json::<R>().await.map_err(|e| {
            SitelogError::transport(self.provider, TransportError::InvalidResponse(e.to_string()))
        })
    }
}

/// Accept record ids sent either as JSON strings or numbers
pub(crate) fn id_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}
