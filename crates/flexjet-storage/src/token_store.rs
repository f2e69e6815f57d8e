//! Token storage on top of a platform secure storage backend.

use crate::{SecureStorage, StorageResult, TokenStorage, TOKEN_KEY};
use tracing::{debug, warn};

/// Production [`TokenStorage`] keeping the token in the platform secure store.
pub struct SecureTokenStore {
    storage: Box<dyn SecureStorage>,
}

impl SecureTokenStore {
    /// Create a token store over the given backend.
    pub fn new(storage: Box<dyn SecureStorage>) -> Self {
        Self { storage }
    }
}

impl TokenStorage for SecureTokenStore {
    fn save_token(&self, token: &str) -> StorageResult<()> {
        // Some backends reject a second item under the same key, so a save is
        // always delete-then-write.
        self.delete_token()?;
        self.storage.set(TOKEN_KEY, token)?;
        debug!(len = token.len(), "Saved auth token");
        Ok(())
    }

    fn get_token(&self) -> Option<String> {
        match self.storage.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Failed to read auth token, treating as signed out");
                None
            }
        }
    }

    fn delete_token(&self) -> StorageResult<()> {
        let removed = self.storage.delete(TOKEN_KEY)?;
        debug!(removed, "Deleted auth token");
        Ok(())
    }
}
