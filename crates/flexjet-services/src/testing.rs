//! Scripted [`ApiClient`] for service tests.

use async_trait::async_trait;
use flexjet_api::{ApiClient, Endpoint, NetworkError, NetworkResult};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;

/// Returns one scripted JSON value or error for every request and records
/// each endpoint it was asked for.
pub struct MockApiClient {
    response: Mutex<NetworkResult<serde_json::Value>>,
    endpoints: Mutex<Vec<Endpoint>>,
}

impl MockApiClient {
    pub fn returning(value: serde_json::Value) -> Self {
        Self {
            response: Mutex::new(Ok(value)),
            endpoints: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: NetworkError) -> Self {
        Self {
            response: Mutex::new(Err(error)),
            endpoints: Mutex::new(Vec::new()),
        }
    }

    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.endpoints.lock().clone()
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn request<T>(&self, endpoint: &Endpoint) -> NetworkResult<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.endpoints.lock().push(endpoint.clone());
        let value = self.response.lock().clone()?;
        serde_json::from_value(value).map_err(|e| NetworkError::DecodingFailed(e.to_string()))
    }
}
