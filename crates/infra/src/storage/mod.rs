//! Durable stores for the active API key
//!
//! Each store keeps exactly one credential under a fixed entry name.

pub mod file;
pub mod keychain;
pub mod memory;

use std::path::PathBuf;
use std::sync::Arc;

use tldcheck_core::CredentialStore;
use tldcheck_domain::{CredentialBackend, CredentialConfig, Result, TldCheckError};
use tracing::debug;

pub use self::file::FileCredentialStore;
pub use self::keychain::{KeyringCredentialStore, NATIVE_KEYCHAIN_AVAILABLE};
pub use self::memory::MemoryCredentialStore;

const CREDENTIAL_DIR: &str = "tldcheck";
const CREDENTIAL_FILE: &str = "credentials.json";

/// Build the store selected by `config.backend`.
///
/// # Errors
/// Returns `TldCheckError::Config` when the keyring backend is selected on a
/// target without a native keychain, or when the file backend has no explicit
/// path and the platform has no user config directory.
pub fn build_credential_store(config: &CredentialConfig) -> Result<Arc<dyn CredentialStore>> {
    let store: Arc<dyn CredentialStore> = match config.backend {
        CredentialBackend::Keyring if !NATIVE_KEYCHAIN_AVAILABLE => {
            return Err(TldCheckError::Config(
                "the keyring backend is not supported on this platform; use the file backend"
                    .into(),
            ));
        }
        CredentialBackend::Keyring => {
            Arc::new(KeyringCredentialStore::new(&config.service_name, &config.entry_name))
        }
        CredentialBackend::File => {
            let path = resolve_credential_path(config)?;
            Arc::new(FileCredentialStore::new(path, &config.entry_name))
        }
        CredentialBackend::Memory => Arc::new(MemoryCredentialStore::new()),
    };

    debug!(backend = %config.backend, "credential store ready");
    Ok(store)
}

/// Path of the credential file: the configured one, else
/// `<user config dir>/tldcheck/credentials.json`.
///
/// # Errors
/// Returns `TldCheckError::Config` when no path can be determined.
pub fn resolve_credential_path(config: &CredentialConfig) -> Result<PathBuf> {
    if let Some(path) = &config.file_path {
        return Ok(path.clone());
    }

    dirs::config_dir()
        .map(|dir| dir.join(CREDENTIAL_DIR).join(CREDENTIAL_FILE))
        .ok_or_else(|| {
            TldCheckError::Config(
                "no user config directory; set credential.file_path or TLDCHECK_CREDENTIAL_FILE"
                    .into(),
            )
        })
}
