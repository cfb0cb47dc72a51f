//! Port interface for the remote validation service
//!
//! One method per endpoint. The HTTP implementation lives in
//! `tldcheck_infra::api`; it attaches the session credential when one is
//! present and never checks for it itself.

use async_trait::async_trait;
use tldcheck_domain::{
    ApiKeyRecord, CacheInfo, HealthStatus, KeyIssued, ValidationRequest, ValidationResult,
};

use crate::errors::ApiError;

#[async_trait]
pub trait ValidationApi: Send + Sync {
    /// `POST /api/validate-tld`
    async fn validate(&self, request: &ValidationRequest) -> Result<ValidationResult, ApiError>;

    /// `POST /api/generate-key` with no body
    async fn generate_key(&self) -> Result<KeyIssued, ApiError>;

    /// `GET /api/cache-info`
    async fn cache_info(&self) -> Result<CacheInfo, ApiError>;

    /// `GET /api/health`
    async fn health(&self) -> Result<HealthStatus, ApiError>;

    /// `GET /api/keys`
    async fn list_keys(&self) -> Result<Vec<ApiKeyRecord>, ApiError>;
}
