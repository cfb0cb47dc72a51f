//! Credential session owned by the application
//!
//! Holds the single active credential. The application creates one session
//! and shares it with the request dispatcher and the credential manager.

use parking_lot::RwLock;
use tldcheck_domain::Credential;

use super::ports::CredentialProvider;

/// The active credential slot (last write wins)
#[derive(Debug, Default)]
pub struct Session {
    credential: RwLock<Option<Credential>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(credential: Credential) -> Self {
        Self { credential: RwLock::new(Some(credential)) }
    }

    pub fn current(&self) -> Option<Credential> {
        self.credential.read().clone()
    }

    pub fn has_credential(&self) -> bool {
        self.credential.read().is_some()
    }

    /// Install `credential`, returning the one it replaced.
    pub fn replace(&self, credential: Credential) -> Option<Credential> {
        self.credential.write().replace(credential)
    }

    pub fn clear(&self) -> Option<Credential> {
        self.credential.write().take()
    }
}

impl CredentialProvider for Session {
    fn credential(&self) -> Option<Credential> {
        self.current()
    }
}
