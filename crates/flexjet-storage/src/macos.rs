//! macOS backend: generic passwords in the login Keychain.

use crate::{platform_error, SecureStorage, StorageError, StorageResult};
use security_framework::access_control::{ProtectionMode, SecAccessControl};
use security_framework::base::Error as SecurityError;
use security_framework::passwords::{
    delete_generic_password, get_generic_password, set_generic_password_options,
    PasswordOptions,
};
use tracing::debug;

/// errSecItemNotFound
const ERR_SEC_ITEM_NOT_FOUND: i32 = -25300;

fn is_not_found(e: &SecurityError) -> bool {
    e.code() == ERR_SEC_ITEM_NOT_FOUND
}

/// Keychain items keyed by (service, account), readable only while the
/// device is unlocked and never synced or migrated off this device.
pub struct KeychainBackend {
    service_name: String,
}

impl KeychainBackend {
    pub fn new(service_name: &str) -> StorageResult<Self> {
        Ok(Self {
            service_name: service_name.to_string(),
        })
    }
}

impl SecureStorage for KeychainBackend {
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        debug!(service = %self.service_name, account = key, "Writing keychain item");

        // An update keeps the old item's accessibility, so always add afresh
        self.delete(key)?;

        let access = SecAccessControl::create_with_protection(
            Some(ProtectionMode::AccessibleWhenUnlockedThisDeviceOnly),
            0,
        )
        .map_err(platform_error("Keychain access control failed"))?;

        let mut options = PasswordOptions::new_generic_password(&self.service_name, key);
        options.set_access_control(access);

        set_generic_password_options(value.as_bytes(), options)
            .map_err(platform_error("Keychain write failed"))
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        debug!(service = %self.service_name, account = key, "Reading keychain item");

        let bytes = match get_generic_password(&self.service_name, key) {
            Ok(bytes) => bytes,
            Err(e) if is_not_found(&e) => return Ok(None),
            Err(e) => return Err(platform_error("Keychain read failed")(e)),
        };

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| StorageError::Encoding(e.to_string()))
    }

    fn delete(&self, key: &str) -> StorageResult<bool> {
        debug!(service = %self.service_name, account = key, "Removing keychain item");

        match delete_generic_password(&self.service_name, key) {
            Ok(()) => Ok(true),
            Err(e) if is_not_found(&e) => Ok(false),
            Err(e) => Err(platform_error("Keychain delete failed")(e)),
        }
    }
}
