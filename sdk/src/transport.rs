//! Shared HTTP plumbing for the Open States providers.
//!
//! Every call is a single GET: build the URL, attach `apikey` plus the
//! operation's query parameters, check the status, read the whole body and
//! decode it. Nothing is retried and nothing is cached.

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::query::QueryParams;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://v3.openstates.org";

/// Errors that can occur when calling the Open States API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be built, sent, or its body read
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Detail lookup returned 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// API returned a non-success status
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Body was empty, truncated, or did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Geo lookup coordinate is non-finite or out of range; nothing was sent
    #[error("Invalid coordinate: lat {lat}, lng {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },
}

/// Credentials, base URL and HTTP client shared by one provider.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            client,
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Build a transport whose HTTP client applies the configured timeout.
    ///
    /// # Errors
    /// Returns `ApiError::Request` if the HTTP client cannot be built.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self::new(client, config.base_url.clone(), config.key.clone()))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue `GET {base_url}{path}` and decode the JSON body as `T`.
    ///
    /// # Errors
    /// - `ApiError::Request` on transport failure or unreadable body
    /// - `ApiError::Status` on any non-2xx response
    /// - `ApiError::Decode` if the body is not valid JSON of the expected shape
    pub async fn get_json<T>(&self, path: &str, query: &QueryParams) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut pairs = Vec::with_capacity(query.len() + 1);
        pairs.push(("apikey", self.api_key.as_str()));
        pairs.extend(query.iter());

        tracing::debug!(%url, params = query.len(), "sending Open States request");

        let response = self.client.get(&url).query(&pairs).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(%url, status = status.as_u16(), "Open States request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|err| {
            tracing::debug!(%url, bytes = body.len(), error = %err, "undecodable response body");
            ApiError::Decode(err)
        })
    }
}
