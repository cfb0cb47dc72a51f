//! Credential Manager - acquire, persist and expose the active API key

use std::sync::Arc;

use tldcheck_domain::{ApiKeyRecord, Credential};
use tracing::{info, warn};

use super::ports::CredentialStore;
use super::session::Session;
use crate::errors::{ApiError, WorkflowError};
use crate::inflight::InFlight;
use crate::validation::ports::ValidationApi;

/// Owns the credential lifecycle.
///
/// `generate` and `forget` are the only operations that write to durable
/// storage.
pub struct CredentialManager {
    api: Arc<dyn ValidationApi>,
    store: Arc<dyn CredentialStore>,
    session: Arc<Session>,
    generate_calls: InFlight,
}

impl CredentialManager {
    pub fn new(
        api: Arc<dyn ValidationApi>,
        store: Arc<dyn CredentialStore>,
        session: Arc<Session>,
    ) -> Self {
        Self { api, store, session, generate_calls: InFlight::new("generate_key") }
    }

    /// Read the persisted credential into the session. No network call.
    ///
    /// # Errors
    /// Returns [`WorkflowError::Storage`] if the store cannot be read; the
    /// session is left as it was.
    pub fn load(&self) -> Result<Option<Credential>, WorkflowError> {
        let stored = self.store.load()?;
        match &stored {
            Some(credential) => {
                info!(key = %credential.fingerprint(), "Using saved API key");
                self.session.replace(credential.clone());
            }
            None => info!("No saved API key"),
        }
        Ok(stored)
    }

    /// Ask the service for a new key, persist it and make it active.
    ///
    /// On any failure the previous credential stays active and stored.
    ///
    /// # Errors
    /// - [`WorkflowError::Api`] if the service call fails or returns an empty
    ///   key
    /// - [`WorkflowError::Storage`] if the new key cannot be persisted
    /// - [`WorkflowError::Superseded`] if another `generate` started meanwhile
    pub async fn generate(&self) -> Result<Credential, WorkflowError> {
        let ticket = self.generate_calls.begin();
        let issued = self.generate_calls.settle(ticket, self.api.generate_key().await)?;
        let issued = issued.inspect_err(|err| warn!(error = %err, "API key generation failed"))?;

        if issued.key.trim().is_empty() {
            return Err(ApiError::Decode("service issued an empty API key".into()).into());
        }

        let credential = Credential::new(issued.key);
        self.store.save(&credential)?;
        let previous = self.session.replace(credential.clone());

        info!(
            key = %credential.fingerprint(),
            replaced = previous.is_some(),
            "Generated new API key"
        );
        Ok(credential)
    }

    pub fn current(&self) -> Option<Credential> {
        self.session.current()
    }

    /// Remove the stored credential and clear the session.
    ///
    /// # Errors
    /// Returns [`WorkflowError::Storage`] if the store cannot be cleared; the
    /// session keeps its credential in that case.
    pub fn forget(&self) -> Result<(), WorkflowError> {
        self.store.clear()?;
        if let Some(previous) = self.session.clear() {
            info!(key = %previous.fingerprint(), "Forgot API key");
        }
        Ok(())
    }

    /// List the keys known to the service. Requires an active credential.
    ///
    /// # Errors
    /// [`WorkflowError::MissingCredential`] without a credential (no network
    /// call), otherwise [`WorkflowError::Api`] on dispatch failure.
    pub async fn list_keys(&self) -> Result<Vec<ApiKeyRecord>, WorkflowError> {
        if !self.session.has_credential() {
            return Err(WorkflowError::MissingCredential);
        }
        Ok(self.api.list_keys().await?)
    }
}
