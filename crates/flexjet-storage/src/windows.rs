//! Windows backend: the per-user Credential Locker (`PasswordVault`).

use crate::{platform_error, SecureStorage, StorageResult};
use tracing::debug;
use windows::core::HSTRING;
use windows::Security::Credentials::{PasswordCredential, PasswordVault};

/// HRESULT_FROM_WIN32(ERROR_NOT_FOUND)
const ERROR_NOT_FOUND: u32 = 0x8007_0490;

/// Vault credentials keyed by (resource, user name).
pub struct VaultBackend {
    resource: HSTRING,
}

impl VaultBackend {
    /// Fails when the Credential Locker cannot be opened.
    pub fn new(service_name: &str) -> StorageResult<Self> {
        open_vault()?;
        Ok(Self {
            resource: HSTRING::from(service_name),
        })
    }

    fn find(&self, vault: &PasswordVault, key: &str) -> StorageResult<Option<PasswordCredential>> {
        match vault.Retrieve(&self.resource, &HSTRING::from(key)) {
            Ok(credential) => Ok(Some(credential)),
            Err(e) if e.code().0 as u32 == ERROR_NOT_FOUND => Ok(None),
            Err(e) => Err(platform_error("Credential lookup failed")(e)),
        }
    }
}

fn open_vault() -> StorageResult<PasswordVault> {
    PasswordVault::new().map_err(platform_error("Credential Locker unavailable"))
}

impl SecureStorage for VaultBackend {
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        debug!(resource = %self.resource, account = key, "Writing vault credential");

        let credential = PasswordCredential::CreatePasswordCredential(
            &self.resource,
            &HSTRING::from(key),
            &HSTRING::from(value),
        )
        .map_err(platform_error("Invalid credential"))?;

        open_vault()?
            .Add(&credential)
            .map_err(platform_error("Credential write failed"))
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        debug!(resource = %self.resource, account = key, "Reading vault credential");

        let vault = open_vault()?;
        let Some(credential) = self.find(&vault, key)? else {
            return Ok(None);
        };

        // Retrieve() returns the credential without its password filled in
        credential
            .RetrievePassword()
            .map_err(platform_error("Credential read failed"))?;
        let password = credential
            .Password()
            .map_err(platform_error("Credential read failed"))?;

        Ok(Some(password.to_string_lossy()))
    }

    fn delete(&self, key: &str) -> StorageResult<bool> {
        debug!(resource = %self.resource, account = key, "Removing vault credential");

        let vault = open_vault()?;
        match self.find(&vault, key)? {
            None => Ok(false),
            Some(credential) => {
                vault
                    .Remove(&credential)
                    .map_err(platform_error("Credential delete failed"))?;
                Ok(true)
            }
        }
    }
}
