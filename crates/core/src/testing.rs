//! Scripted fakes for the core ports
//!
//! Enabled for this crate's tests and, through the `test-utils` feature, for
//! downstream crates.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tldcheck_domain::{
    ApiKeyRecord, CacheInfo, Credential, HealthStatus, KeyIssued, Result, TldCheckError,
    ValidationRequest, ValidationResult,
};

use crate::credentials::ports::CredentialStore;
use crate::errors::ApiError;
use crate::validation::ports::ValidationApi;

type Scripted<T> = (Duration, std::result::Result<T, ApiError>);

/// [`ValidationApi`] that replays queued responses, optionally after a delay.
///
/// An endpoint with an empty queue answers with a network error.
#[derive(Default)]
pub struct FakeApi {
    validate: Mutex<VecDeque<Scripted<ValidationResult>>>,
    generate: Mutex<VecDeque<Scripted<KeyIssued>>>,
    cache: Mutex<VecDeque<Scripted<CacheInfo>>>,
    health: Mutex<VecDeque<Scripted<HealthStatus>>>,
    keys: Mutex<VecDeque<Scripted<Vec<ApiKeyRecord>>>>,
    requests: Mutex<Vec<ValidationRequest>>,
    calls: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_validate(&self, result: std::result::Result<ValidationResult, ApiError>) {
        self.push_validate_after(Duration::ZERO, result);
    }

    pub fn push_validate_after(
        &self,
        delay: Duration,
        result: std::result::Result<ValidationResult, ApiError>,
    ) {
        self.validate.lock().push_back((delay, result));
    }

    pub fn push_generate(&self, result: std::result::Result<KeyIssued, ApiError>) {
        self.push_generate_after(Duration::ZERO, result);
    }

    pub fn push_generate_after(
        &self,
        delay: Duration,
        result: std::result::Result<KeyIssued, ApiError>,
    ) {
        self.generate.lock().push_back((delay, result));
    }

    pub fn push_cache(&self, result: std::result::Result<CacheInfo, ApiError>) {
        self.push_cache_after(Duration::ZERO, result);
    }

    pub fn push_cache_after(
        &self,
        delay: Duration,
        result: std::result::Result<CacheInfo, ApiError>,
    ) {
        self.cache.lock().push_back((delay, result));
    }

    pub fn push_health(&self, result: std::result::Result<HealthStatus, ApiError>) {
        self.health.lock().push_back((Duration::ZERO, result));
    }

    pub fn push_keys(&self, result: std::result::Result<Vec<ApiKeyRecord>, ApiError>) {
        self.keys.lock().push_back((Duration::ZERO, result));
    }

    /// Validation requests received so far, in call order
    pub fn requests(&self) -> Vec<ValidationRequest> {
        self.requests.lock().clone()
    }

    /// Total calls across every endpoint
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn next<T>(
        &self,
        queue: &Mutex<VecDeque<Scripted<T>>>,
        endpoint: &str,
    ) -> std::result::Result<T, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let scripted = queue.lock().pop_front();
        match scripted {
            Some((delay, result)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => Err(ApiError::Network(format!("no scripted response for {endpoint}"))),
        }
    }
}

#[async_trait]
impl ValidationApi for FakeApi {
    async fn validate(
        &self,
        request: &ValidationRequest,
    ) -> std::result::Result<ValidationResult, ApiError> {
        self.requests.lock().push(request.clone());
        self.next(&self.validate, "validate").await
    }

    async fn generate_key(&self) -> std::result::Result<KeyIssued, ApiError> {
        self.next(&self.generate, "generate_key").await
    }

    async fn cache_info(&self) -> std::result::Result<CacheInfo, ApiError> {
        self.next(&self.cache, "cache_info").await
    }

    async fn health(&self) -> std::result::Result<HealthStatus, ApiError> {
        self.next(&self.health, "health").await
    }

    async fn list_keys(&self) -> std::result::Result<Vec<ApiKeyRecord>, ApiError> {
        self.next(&self.keys, "list_keys").await
    }
}

/// In-memory [`CredentialStore`] with failure injection
#[derive(Default)]
pub struct FakeCredentialStore {
    value: Mutex<Option<Credential>>,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl FakeCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(credential: Credential) -> Self {
        Self { value: Mutex::new(Some(credential)), ..Self::default() }
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn stored(&self) -> Option<Credential> {
        self.value.lock().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl CredentialStore for FakeCredentialStore {
    fn load(&self) -> Result<Option<Credential>> {
        Ok(self.value.lock().clone())
    }

    fn save(&self, credential: &Credential) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(TldCheckError::Storage("injected save failure".into()));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.value.lock() = Some(credential.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.value.lock().take();
        Ok(())
    }
}
