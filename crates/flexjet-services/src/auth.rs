//! Sign-in and sign-out.

use crate::run_storage;
use async_trait::async_trait;
use flexjet_api::{ApiClient, Endpoint, NetworkError, SignInRequest, SignInResponse};
use flexjet_storage::{StorageError, TokenStorage};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Failure of an authentication operation.
#[derive(Error, Debug)]
pub enum AuthServiceError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("Secure storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AuthServiceError {
    pub fn user_facing_message(&self) -> String {
        match self {
            AuthServiceError::Network(e) => e.user_facing_message(),
            AuthServiceError::Storage(_) => "Failed to update secure storage.".to_string(),
        }
    }

    pub fn is_authentication_error(&self) -> bool {
        match self {
            AuthServiceError::Network(e) => e.is_authentication_error(),
            AuthServiceError::Storage(_) => false,
        }
    }
}

pub type AuthServiceResult<T> = Result<T, AuthServiceError>;

/// Session management against the API and the credential store.
#[async_trait]
pub trait AuthenticationService: Send + Sync {
    /// Whether a token is stored. Local only; reads the credential store.
    fn is_authenticated(&self) -> bool;

    /// Exchange credentials for a token and persist it.
    ///
    /// Nothing in the store changes unless a token was obtained.
    async fn sign_in(&self, username: &str, password: &str) -> AuthServiceResult<()>;

    /// Remove the stored token. On failure the token stays in place.
    async fn sign_out(&self) -> AuthServiceResult<()>;
}

pub struct DefaultAuthenticationService<C> {
    api_client: Arc<C>,
    token_storage: Arc<dyn TokenStorage>,
}

impl<C: ApiClient> DefaultAuthenticationService<C> {
    pub fn new(api_client: Arc<C>, token_storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            api_client,
            token_storage,
        }
    }
}

#[async_trait]
impl<C: ApiClient> AuthenticationService for DefaultAuthenticationService<C> {
    fn is_authenticated(&self) -> bool {
        self.token_storage.has_token()
    }

    async fn sign_in(&self, username: &str, password: &str) -> AuthServiceResult<()> {
        let endpoint = Endpoint::post("api/signIn").with_json_body(&SignInRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?;

        let response: SignInResponse = self.api_client.request(&endpoint).await?;

        let token = response.token;
        run_storage(&self.token_storage, move |storage| storage.save_token(&token))
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to persist auth token");
                e
            })?;

        info!("Signed in");
        Ok(())
    }

    async fn sign_out(&self) -> AuthServiceResult<()> {
        run_storage(&self.token_storage, |storage| storage.delete_token())
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to remove auth token");
                e
            })?;

        info!("Signed out");
        Ok(())
    }
}
