//! Storage trait definitions.

use crate::StorageResult;

/// Trait for secure storage backends
pub trait SecureStorage: Send + Sync {
    /// Store a value securely
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Retrieve a value
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Delete a value. Returns whether an entry was removed.
    fn delete(&self, key: &str) -> StorageResult<bool>;

    /// Check if a key exists
    fn has(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// Storage for the single authentication token.
///
/// At most one token exists at a time. Implementations must be safe to read
/// from concurrent requests; callers serialize saves and deletes themselves.
pub trait TokenStorage: Send + Sync {
    /// Replace any stored token with `token`.
    fn save_token(&self, token: &str) -> StorageResult<()>;

    /// The stored token, if any. Never fails: an unreadable store reads as empty.
    fn get_token(&self) -> Option<String>;

    /// Remove the stored token. Succeeds when there is nothing to remove.
    fn delete_token(&self) -> StorageResult<()>;

    /// Whether a token is stored.
    fn has_token(&self) -> bool {
        self.get_token().is_some()
    }
}

/// Behaviour every [`SecureStorage`] backend must show.
#[cfg(test)]
pub(crate) fn assert_backend_contract(storage: &dyn SecureStorage) {
    const KEY: &str = "contract_key";

    let _ = storage.delete(KEY);
    assert_eq!(storage.get(KEY).unwrap(), None);
    assert!(!storage.has(KEY).unwrap());

    storage.set(KEY, "first").unwrap();
    assert_eq!(storage.get(KEY).unwrap().as_deref(), Some("first"));
    assert!(storage.has(KEY).unwrap());

    storage.set(KEY, "second").unwrap();
    assert_eq!(storage.get(KEY).unwrap().as_deref(), Some("second"));

    assert!(storage.delete(KEY).unwrap());
    assert!(!storage.delete(KEY).unwrap());
    assert_eq!(storage.get(KEY).unwrap(), None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapStorage(Mutex<HashMap<String, String>>);

    impl SecureStorage for MapStorage {
        fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            self.0.lock().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Ok(self.0.lock().get(key).cloned())
        }

        fn delete(&self, key: &str) -> StorageResult<bool> {
            Ok(self.0.lock().remove(key).is_some())
        }
    }

    #[test]
    fn map_backend_meets_contract() {
        assert_backend_contract(&MapStorage::default());
    }
}
