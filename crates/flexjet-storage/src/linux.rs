//! Linux backend: items in the default Secret Service collection.
//!
//! Each entry is located by its `service` and `account` attributes. The
//! blocking client is used; callers on an async runtime must move calls onto
//! a blocking thread.

use crate::{platform_error, SecureStorage, StorageError, StorageResult};
use secret_service::blocking::{Collection, SecretService};
use secret_service::EncryptionType;
use std::collections::HashMap;
use tracing::debug;

pub struct SecretServiceBackend {
    service_name: String,
}

impl SecretServiceBackend {
    /// Fails when no Secret Service answers on the session bus.
    pub fn new(service_name: &str) -> StorageResult<Self> {
        SecretService::connect(EncryptionType::Dh)
            .map_err(platform_error("Secret Service unavailable"))?;

        Ok(Self {
            service_name: service_name.to_string(),
        })
    }

    fn attributes<'a>(&'a self, account: &'a str) -> HashMap<&'a str, &'a str> {
        HashMap::from([("service", self.service_name.as_str()), ("account", account)])
    }

    /// Run `op` against the unlocked default collection.
    fn in_collection<T>(
        &self,
        op: impl FnOnce(&Collection) -> StorageResult<T>,
    ) -> StorageResult<T> {
        let service = SecretService::connect(EncryptionType::Dh)
            .map_err(platform_error("Secret Service unavailable"))?;
        let collection = service
            .get_default_collection()
            .map_err(platform_error("No default keyring collection"))?;

        let locked = collection
            .is_locked()
            .map_err(platform_error("Keyring state unknown"))?;
        if locked {
            collection
                .unlock()
                .map_err(platform_error("Keyring could not be unlocked"))?;
        }

        op(&collection)
    }
}

impl SecureStorage for SecretServiceBackend {
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        debug!(service = %self.service_name, account = key, "Writing Secret Service item");

        let label = format!("FlexJet ({})", key);
        self.in_collection(|collection| {
            collection
                .create_item(&label, self.attributes(key), value.as_bytes(), true, "text/plain")
                .map(|_| ())
                .map_err(platform_error("Failed to write keyring item"))
        })
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        debug!(service = %self.service_name, account = key, "Reading Secret Service item");

        self.in_collection(|collection| {
            let matches = collection
                .search_items(self.attributes(key))
                .map_err(platform_error("Keyring search failed"))?;

            match matches.first() {
                None => Ok(None),
                Some(item) => {
                    let bytes = item
                        .get_secret()
                        .map_err(platform_error("Failed to read keyring item"))?;
                    String::from_utf8(bytes)
                        .map(Some)
                        .map_err(|e| StorageError::Encoding(e.to_string()))
                }
            }
        })
    }

    fn delete(&self, key: &str) -> StorageResult<bool> {
        debug!(service = %self.service_name, account = key, "Removing Secret Service items");

        self.in_collection(|collection| {
            let matches = collection
                .search_items(self.attributes(key))
                .map_err(platform_error("Keyring search failed"))?;

            // Duplicates can exist if another client wrote under the same attributes
            for item in &matches {
                item.delete()
                    .map_err(platform_error("Failed to remove keyring item"))?;
            }
            Ok(!matches.is_empty())
        })
    }
}
