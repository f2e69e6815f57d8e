//! Request descriptions.

use crate::{NetworkError, NetworkResult};
use serde::Serialize;
use std::fmt;

/// HTTP method of an [`Endpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One request's target, method, body, and auth requirement.
///
/// Built per call and consumed by [`crate::ApiClient::request`]. Defaults to
/// an unauthenticated `GET` with no body.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    path: String,
    method: HttpMethod,
    body: Option<serde_json::Value>,
    requires_auth: bool,
}

impl Endpoint {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: HttpMethod::default(),
            body: None,
            requires_auth: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path).with_method(HttpMethod::Get)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(path).with_method(HttpMethod::Post)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(path).with_method(HttpMethod::Put)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(path).with_method(HttpMethod::Delete)
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Require the stored bearer token on this request.
    pub fn requiring_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Attach `body`, serialized as JSON.
    ///
    /// Fails with [`NetworkError::InvalidRequest`] if the body cannot be
    /// represented as JSON (e.g. a map with non-string keys).
    pub fn with_json_body<B: Serialize + ?Sized>(mut self, body: &B) -> NetworkResult<Self> {
        let value = serde_json::to_value(body).map_err(|e| {
            tracing::warn!(path = %self.path, error = %e, "Failed to serialize request body");
            NetworkError::InvalidRequest
        })?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let endpoint = Endpoint::new("api/flights");
        assert_eq!(endpoint.path(), "api/flights");
        assert_eq!(endpoint.method(), HttpMethod::Get);
        assert!(endpoint.body().is_none());
        assert!(!endpoint.requires_auth());
    }

    #[test]
    fn test_builders() {
        let endpoint = Endpoint::post("api/signIn")
            .with_json_body(&serde_json::json!({"username": "pilot"}))
            .unwrap();
        assert_eq!(endpoint.method(), HttpMethod::Post);
        assert_eq!(endpoint.body().unwrap()["username"], "pilot");
        assert!(!endpoint.requires_auth());

        let endpoint = Endpoint::delete("api/flights/FL001").requiring_auth();
        assert_eq!(endpoint.method(), HttpMethod::Delete);
        assert!(endpoint.requires_auth());

        assert_eq!(Endpoint::put("x").method(), HttpMethod::Put);
        assert_eq!(Endpoint::get("x").method(), HttpMethod::Get);
    }

    #[test]
    fn test_unserializable_body_is_invalid_request() {
        let mut body = HashMap::new();
        body.insert((1, 2), "tuple keys cannot be JSON object keys");

        let result = Endpoint::post("api/signIn").with_json_body(&body);
        assert_eq!(result.unwrap_err(), NetworkError::InvalidRequest);
    }

    #[test]
    fn test_method_strings() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
        assert_eq!(
            reqwest::Method::from(HttpMethod::Delete),
            reqwest::Method::DELETE
        );
    }
}
