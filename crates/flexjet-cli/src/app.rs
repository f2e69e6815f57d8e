//! Service wiring for CLI commands.

use anyhow::{anyhow, Context, Result};
use flexjet_api::{ApiClientConfig, HttpApiClient};
use flexjet_config_and_utils::Config;
use flexjet_services::{AuthenticationService, DefaultAuthenticationService, DefaultFlightService};
use flexjet_storage::TokenStorage;
use std::sync::Arc;
use tracing::debug;

/// Services shared by every command, built once per invocation.
pub struct App {
    pub auth: Arc<DefaultAuthenticationService<HttpApiClient>>,
    pub flights: DefaultFlightService<HttpApiClient>,
}

impl App {
    pub async fn new(config: &Config) -> Result<Self> {
        let token_store = tokio::task::spawn_blocking(flexjet_storage::create_token_store)
            .await?
            .context("Secure storage is unavailable")?;
        let token_storage: Arc<dyn TokenStorage> = Arc::new(token_store);

        let client_config = ApiClientConfig::new(config.api_base_url.clone())
            .with_timeout(config.request_timeout());
        let api_client = HttpApiClient::new(client_config, Arc::clone(&token_storage))
            .map_err(|e| anyhow!("{} ({})", e.user_facing_message(), config.api_base_url))?;
        debug!(base_url = %api_client.base_url(), "API client ready");

        let api_client = Arc::new(api_client);
        Ok(Self {
            auth: Arc::new(DefaultAuthenticationService::new(
                Arc::clone(&api_client),
                token_storage,
            )),
            flights: DefaultFlightService::new(api_client),
        })
    }

    /// Whether a token is stored, read off the async executor.
    pub async fn is_signed_in(&self) -> Result<bool> {
        let auth = Arc::clone(&self.auth);
        Ok(tokio::task::spawn_blocking(move || auth.is_authenticated()).await?)
    }
}
