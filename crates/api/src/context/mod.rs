//! Application context - dependency injection container

use std::sync::Arc;

use tldcheck_core::{
    CacheInfoReader, CredentialManager, CredentialStore, Session, ValidationService,
};
use tldcheck_domain::{ClientConfig, Result, TldCheckError};
use tldcheck_infra::{build_credential_store, ApiClient, ApiClientConfig};
use tracing::{info, warn};

use crate::utils::logging::workflow_error_label;

/// Application context - holds all services and dependencies
///
/// The session is the only shared mutable state: the dispatcher reads the
/// credential from it and the Credential Manager writes it.
pub struct AppContext {
    pub config: ClientConfig,
    pub session: Arc<Session>,
    pub api: Arc<ApiClient>,
    pub credentials: CredentialManager,
    pub validation: ValidationService,
    pub cache: CacheInfoReader,
}

impl AppContext {
    /// Build the context with the credential store selected by `config`
    /// and load the saved credential.
    ///
    /// # Errors
    /// Returns `TldCheckError::Config` if the store or the HTTP client cannot
    /// be created.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let store = build_credential_store(&config.credential)?;
        Self::with_store(config, store)
    }

    /// Build the context around an explicit credential store.
    ///
    /// An unreadable store is logged and treated as empty so the user can
    /// still generate a key.
    pub fn with_store(config: ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
        let session = Arc::new(Session::new());
        let api = Arc::new(
            ApiClient::new(ApiClientConfig::from(&config), session.clone())
                .map_err(|e| TldCheckError::Config(e.to_string()))?,
        );

        let ctx = Self {
            credentials: CredentialManager::new(api.clone(), store, session.clone()),
            validation: ValidationService::new(api.clone(), session.clone()),
            cache: CacheInfoReader::new(api.clone()),
            api,
            session,
            config,
        };

        if let Err(err) = ctx.credentials.load() {
            warn!(error = %err, error_type = workflow_error_label(&err), "failed to read saved API key");
        }

        info!(
            base_url = %ctx.config.base_url,
            backend = %ctx.config.credential.backend,
            has_key = ctx.session.has_credential(),
            "application context ready"
        );
        Ok(ctx)
    }
}
