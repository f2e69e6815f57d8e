//! In-memory token storage for tests.

use crate::{StorageError, StorageResult, TokenStorage};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// [`TokenStorage`] held in process memory.
///
/// Saves and deletes can be made to fail to exercise error paths.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
    fail_saves: AtomicBool,
    fail_deletes: AtomicBool,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::default();
        *store.token.lock() = Some(token.into());
        store
    }

    /// Make subsequent saves fail with a platform error.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent deletes fail with a platform error.
    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }
}

impl TokenStorage for MemoryTokenStore {
    fn save_token(&self, token: &str) -> StorageResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Platform("save failed".to_string()));
        }
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    fn get_token(&self) -> Option<String> {
        self.token.lock().clone()
    }

    fn delete_token(&self) -> StorageResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(StorageError::Platform("delete failed".to_string()));
        }
        self.token.lock().take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemoryTokenStore::new();
        assert!(!store.has_token());

        store.save_token("t1").unwrap();
        store.save_token("t2").unwrap();
        assert_eq!(store.get_token(), Some("t2".to_string()));

        store.delete_token().unwrap();
        store.delete_token().unwrap();
        assert_eq!(store.get_token(), None);
    }

    #[test]
    fn test_injected_failures_leave_state_untouched() {
        let store = MemoryTokenStore::with_token("kept");
        store.set_fail_saves(true);
        store.set_fail_deletes(true);

        assert!(store.save_token("new").is_err());
        assert!(store.delete_token().is_err());
        assert_eq!(store.get_token(), Some("kept".to_string()));

        store.set_fail_deletes(false);
        store.delete_token().unwrap();
        assert!(!store.has_token());
    }
}
