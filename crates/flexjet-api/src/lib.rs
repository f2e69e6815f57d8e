//! Typed HTTP client for the FlexJet API.
//!
//! This crate provides:
//! - [`Endpoint`]: a value describing one request (path, method, body, auth)
//! - [`NetworkError`]: the closed set of failures a request can end in
//! - [`ApiClient`] and its reqwest implementation [`HttpApiClient`], which
//!   injects the stored bearer token, classifies failures, and decodes
//!   typed responses
//! - wire models for sign-in and flights

mod classify;
mod client;
mod endpoint;
mod error;
mod models;

pub use classify::classify_response;
pub use client::{ApiClient, ApiClientConfig, HttpApiClient, DEFAULT_REQUEST_TIMEOUT};
pub use endpoint::{Endpoint, HttpMethod};
pub use error::{NetworkError, NetworkResult};
pub use models::{ApiErrorResponse, Flight, SignInRequest, SignInResponse};
