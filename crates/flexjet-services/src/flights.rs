//! Flight retrieval.

use async_trait::async_trait;
use flexjet_api::{ApiClient, Endpoint, Flight, NetworkResult};
use std::sync::Arc;
use tracing::debug;

#[async_trait]
pub trait FlightService: Send + Sync {
    /// The signed-in user's flights, in the order the server returns them.
    async fn fetch_flights(&self) -> NetworkResult<Vec<Flight>>;
}

pub struct DefaultFlightService<C> {
    api_client: Arc<C>,
}

impl<C: ApiClient> DefaultFlightService<C> {
    pub fn new(api_client: Arc<C>) -> Self {
        Self { api_client }
    }
}

#[async_trait]
impl<C: ApiClient> FlightService for DefaultFlightService<C> {
    async fn fetch_flights(&self) -> NetworkResult<Vec<Flight>> {
        let endpoint = Endpoint::get("api/flights").requiring_auth();
        let flights: Vec<Flight> = self.api_client.request(&endpoint).await?;
        debug!(count = flights.len(), "Fetched flights");
        Ok(flights)
    }
}
