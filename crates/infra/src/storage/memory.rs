//! Process-local credential store

use parking_lot::Mutex;
use tldcheck_core::CredentialStore;
use tldcheck_domain::{Credential, Result};

/// Keeps the credential in memory; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    value: Mutex<Option<Credential>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<Credential>> {
        Ok(self.value.lock().clone())
    }

    fn save(&self, credential: &Credential) -> Result<()> {
        *self.value.lock() = Some(credential.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.value.lock().take();
        Ok(())
    }
}
