//! Port interfaces for credential storage and lookup

use tldcheck_domain::{Credential, Result};

/// Durable storage for the single active credential.
///
/// Implementations store one entry under a fixed name. Operations are
/// synchronous; platform keychains and small files do not benefit from async.
pub trait CredentialStore: Send + Sync {
    /// Read the stored credential. A missing entry is `Ok(None)`.
    fn load(&self) -> Result<Option<Credential>>;

    /// Store `credential`, overwriting any previous value.
    fn save(&self, credential: &Credential) -> Result<()>;

    /// Remove the stored credential (idempotent).
    fn clear(&self) -> Result<()>;
}

/// Source of the credential attached to outgoing requests
pub trait CredentialProvider: Send + Sync {
    fn credential(&self) -> Option<Credential>;
}
