//! Platform keychain credential store
//!
//! Thin wrapper over the `keyring` crate: macOS Keychain, Windows Credential
//! Manager, or the kernel keyutils keyring on Linux. Other targets have no
//! native store and are rejected when the store is built.

use keyring::Entry;
use tldcheck_core::CredentialStore;
use tldcheck_domain::{Credential, Result, TldCheckError};
use tracing::debug;

use crate::errors::InfraError;

/// Whether `keyring` has a native store on this target. Without one it falls
/// back to an in-process mock that forgets every write.
pub const NATIVE_KEYCHAIN_AVAILABLE: bool =
    cfg!(any(target_os = "macos", target_os = "ios", target_os = "windows", target_os = "linux"));

/// Stores the credential as the password of one keychain entry.
pub struct KeyringCredentialStore {
    service_name: String,
    entry_name: String,
}

impl KeyringCredentialStore {
    /// # Arguments
    /// * `service_name` - Keychain service (e.g., "tld-validator")
    /// * `entry_name` - Entry holding the key (e.g., "tld-api-key")
    pub fn new(service_name: impl Into<String>, entry_name: impl Into<String>) -> Self {
        Self { service_name: service_name.into(), entry_name: entry_name.into() }
    }

    fn entry(&self) -> Result<Entry> {
        Entry::new(&self.service_name, &self.entry_name).map_err(|e| TldCheckError::from(InfraError::from(e)))
    }
}

impl CredentialStore for KeyringCredentialStore {
    fn load(&self) -> Result<Option<Credential>> {
        debug!(service = %self.service_name, entry = %self.entry_name, "Reading API key from keychain");

        match self.entry()?.get_password() {
            Ok(secret) if secret.is_empty() => Ok(None),
            Ok(secret) => Ok(Some(Credential::new(secret))),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(InfraError::from(e).into()),
        }
    }

    fn save(&self, credential: &Credential) -> Result<()> {
        debug!(
            service = %self.service_name,
            entry = %self.entry_name,
            key = %credential.fingerprint(),
            "Storing API key in keychain"
        );

        self.entry()?
            .set_password(credential.expose())
            .map_err(|e| TldCheckError::from(InfraError::from(e)))
    }

    /// Idempotent: a missing entry is not an error.
    fn clear(&self) -> Result<()> {
        debug!(service = %self.service_name, entry = %self.entry_name, "Deleting API key from keychain");

        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(InfraError::from(e).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Platform keychains are not available in CI; these only exercise
    // behavior that holds for every keyring backend.
    #[test]
    fn clear_is_idempotent_or_reports_storage_access() {
        let store = KeyringCredentialStore::new("tld-validator-test", "missing-entry");

        match store.clear() {
            Ok(()) => {}
            Err(TldCheckError::Security(_)) => {}
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    #[ignore = "needs an unlocked platform keychain"]
    fn saved_key_is_visible_to_a_fresh_store() {
        let writer = KeyringCredentialStore::new("tld-validator-test", "round-trip");
        writer.save(&Credential::new("round-trip-key")).unwrap();

        let reader = KeyringCredentialStore::new("tld-validator-test", "round-trip");
        let loaded = reader.load().unwrap();
        reader.clear().unwrap();

        assert_eq!(loaded, Some(Credential::new("round-trip-key")));
        assert_eq!(writer.load().unwrap(), None);
    }
}
