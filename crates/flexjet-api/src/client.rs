//! HTTP transport for the FlexJet API.
//!
//! [`HttpApiClient`] resolves an [`Endpoint`] against the configured base URL,
//! attaches the stored bearer token when the endpoint requires it, classifies
//! the response status, and decodes the body into the caller's type. Every
//! failure leaves this module as a [`NetworkError`].

use crate::{classify_response, Endpoint, NetworkError, NetworkResult};
use async_trait::async_trait;
use flexjet_storage::TokenStorage;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use std::collections::hash_map::DefaultHasher;
use std::error::Error;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn summarize_response_body(body: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    body.hash(&mut hasher);
    format!("len={},digest={:016x}", body.len(), hasher.finish())
}

/// Issues typed requests against the API.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Perform `endpoint` and decode a successful body as `T`.
    async fn request<T>(&self, endpoint: &Endpoint) -> NetworkResult<T>
    where
        T: DeserializeOwned + Send + 'static;
}

/// Settings for [`HttpApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// Absolute http(s) URL endpoint paths are resolved against.
    pub base_url: String,
    /// Upper bound on a whole request, connect through body.
    pub timeout: Duration,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// reqwest-backed [`ApiClient`].
#[derive(Clone)]
pub struct HttpApiClient {
    http_client: reqwest::Client,
    base_url: Url,
    token_storage: Arc<dyn TokenStorage>,
}

impl HttpApiClient {
    /// Create a client for `config.base_url`, reading tokens from `token_storage`.
    ///
    /// The base URL is treated as a directory: a missing trailing slash is
    /// added so `https://host/v1` and `https://host/v1/` resolve paths alike.
    pub fn new(config: ApiClientConfig, token_storage: Arc<dyn TokenStorage>) -> NetworkResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::warn!(error = %e, "Failed to build HTTP client");
                NetworkError::InvalidRequest
            })?;

        Ok(Self {
            http_client,
            base_url,
            token_storage,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Read the token off the async executor; platform stores block.
    async fn stored_token(&self) -> Option<String> {
        let storage = Arc::clone(&self.token_storage);
        tokio::task::spawn_blocking(move || storage.get_token())
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Token lookup task failed");
                None
            })
    }

    /// Resolve `path` against the base URL.
    ///
    /// A leading `/` is ignored. The result must stay under the base URL.
    fn endpoint_url(&self, path: &str) -> NetworkResult<Url> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| {
                tracing::warn!(path, error = %e, "Invalid endpoint path");
                NetworkError::InvalidRequest
            })?;

        if !url.as_str().starts_with(self.base_url.as_str()) {
            tracing::warn!(path, "Endpoint path escapes the API base URL");
            return Err(NetworkError::InvalidRequest);
        }

        Ok(url)
    }
}

fn parse_base_url(raw: &str) -> NetworkResult<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|e| {
        tracing::warn!(base_url = raw, error = %e, "Invalid API base URL");
        NetworkError::InvalidRequest
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        tracing::warn!(base_url = raw, "API base URL must be an absolute http(s) URL");
        return Err(NetworkError::InvalidRequest);
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// Map a failure while reading the response body.
///
/// Timeouts and connection faults after the headers arrived are transport
/// failures like any other; anything else is an unreadable response.
fn body_read_error(e: &reqwest::Error) -> NetworkError {
    if e.is_timeout() {
        return NetworkError::TransportFailure("request timed out".to_string());
    }

    let mut source = e.source();
    while let Some(err) = source {
        let is_body_fault = err
            .downcast_ref::<reqwest::Error>()
            .is_some_and(reqwest::Error::is_body);
        if is_body_fault || err.is::<std::io::Error>() {
            return NetworkError::TransportFailure(error_chain(e));
        }
        source = err.source();
    }

    NetworkError::Unknown
}

/// `outer: inner: ...` for an error and its sources.
fn error_chain(e: &dyn Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(err) = source {
        message.push_str(": ");
        message.push_str(&err.to_string());
        source = err.source();
    }
    message
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn request<T>(&self, endpoint: &Endpoint) -> NetworkResult<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.endpoint_url(endpoint.path())?;
        let method = endpoint.method();

        let mut builder = self
            .http_client
            .request(method.into(), url.clone())
            .header(CONTENT_TYPE, "application/json");

        if endpoint.requires_auth() {
            let Some(token) = self.stored_token().await else {
                tracing::debug!(%method, path = endpoint.path(), "No stored token for authenticated endpoint");
                return Err(NetworkError::Unauthenticated);
            };
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = endpoint.body() {
            builder = builder.body(body.to_string());
        }

        tracing::debug!(%method, path = endpoint.path(), requires_auth = endpoint.requires_auth(), "Sending API request");

        let response = builder.send().await.map_err(|e| {
            if e.is_builder() {
                tracing::warn!(%method, %url, error = %e, "Failed to build request");
                NetworkError::InvalidRequest
            } else if e.is_timeout() {
                tracing::warn!(%method, %url, "API request timed out");
                NetworkError::TransportFailure("request timed out".to_string())
            } else {
                tracing::warn!(%method, %url, error = %e, "API request failed");
                NetworkError::TransportFailure(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            tracing::warn!(%method, %url, status, error = %error_chain(&e), "Failed to read response body");
            body_read_error(&e)
        })?;

        if let Err(err) = classify_response(status, &body) {
            let body_summary = summarize_response_body(&body);
            tracing::warn!(%method, %url, status, body_summary = %body_summary, "API request rejected");
            return Err(err);
        }

        serde_json::from_slice(&body).map_err(|e| {
            let body_summary = summarize_response_body(&body);
            tracing::warn!(%method, %url, status, body_summary = %body_summary, error = %e, "Failed to decode response");
            NetworkError::DecodingFailed(e.to_string())
        })
    }
}
