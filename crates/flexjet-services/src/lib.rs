//! Application services for the FlexJet client.
//!
//! This crate provides:
//! - [`AuthenticationService`]: sign-in, sign-out and local auth status
//! - [`FlightService`]: the authenticated flight list
//!
//! Both are generic over [`flexjet_api::ApiClient`] and receive their
//! dependencies explicitly; nothing here is a global.

mod auth;
mod flights;

#[cfg(test)]
mod testing;

pub use auth::{
    AuthServiceError, AuthServiceResult, AuthenticationService, DefaultAuthenticationService,
};
pub use flights::{DefaultFlightService, FlightService};

use flexjet_storage::{StorageError, StorageResult, TokenStorage};
use std::sync::Arc;

/// Run a token storage operation on the blocking pool.
///
/// Platform keychains block the calling thread and some refuse to run on an
/// async executor thread.
pub(crate) async fn run_storage<F, T>(storage: &Arc<dyn TokenStorage>, op: F) -> StorageResult<T>
where
    F: FnOnce(&dyn TokenStorage) -> StorageResult<T> + Send + 'static,
    T: Send + 'static,
{
    let storage = Arc::clone(storage);
    tokio::task::spawn_blocking(move || op(storage.as_ref()))
        .await
        .map_err(|e| StorageError::Platform(format!("Storage task failed: {}", e)))?
}
