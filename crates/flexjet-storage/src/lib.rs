//! Credential storage for the FlexJet client.
//!
//! Two layers:
//! - [`SecureStorage`]: keyed secrets in the platform store
//!   - **macOS**: Keychain Access via `security-framework`
//!   - **Linux**: Secret Service (GNOME Keyring / KWallet) via `secret-service`
//!   - **Windows**: Credential Vault via `windows` crate
//! - [`TokenStorage`]: the single bearer token, implemented by
//!   [`SecureTokenStore`] on top of a platform backend and by
//!   [`MemoryTokenStore`] for tests.

mod memory;
mod token_store;
mod traits;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "windows")]
mod windows;

pub use memory::MemoryTokenStore;
pub use token_store::SecureTokenStore;
pub use traits::{SecureStorage, TokenStorage};

use thiserror::Error;

/// Service name the token entry is stored under.
pub const SERVICE_NAME: &str = "com.flexjet.auth";

/// Account (key) of the token entry within [`SERVICE_NAME`].
pub const TOKEN_KEY: &str = "authToken";

/// Error type for storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Platform-specific storage error
    #[error("Platform storage error: {0}")]
    Platform(String),

    /// Encoding/decoding error
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Map a backend error to [`StorageError::Platform`], prefixed with `action`.
#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
pub(crate) fn platform_error<E: std::fmt::Display>(
    action: &'static str,
) -> impl FnOnce(E) -> StorageError {
    move |e| StorageError::Platform(format!("{}: {}", action, e))
}

/// Create the platform secure storage backend for `service_name`.
pub fn create_storage(service_name: &str) -> StorageResult<Box<dyn SecureStorage>> {
    #[cfg(target_os = "macos")]
    {
        let storage = macos::KeychainBackend::new(service_name)?;
        Ok(Box::new(storage))
    }

    #[cfg(target_os = "linux")]
    {
        let storage = linux::SecretServiceBackend::new(service_name)?;
        Ok(Box::new(storage))
    }

    #[cfg(target_os = "windows")]
    {
        let storage = windows::VaultBackend::new(service_name)?;
        Ok(Box::new(storage))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(StorageError::Platform(format!(
            "No secure storage implementation available for this platform ({})",
            service_name
        )))
    }
}

/// Create the production token store backed by the platform secure storage.
pub fn create_token_store() -> StorageResult<SecureTokenStore> {
    let storage = create_storage(SERVICE_NAME)?;
    Ok(SecureTokenStore::new(storage))
}
