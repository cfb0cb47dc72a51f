//! Request dispatcher for the validation service
//!
//! Builds JSON requests, attaches the active credential and turns non-success
//! responses into an [`ApiError`] carrying the server's message.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tldcheck_core::{ApiError, CredentialProvider, ValidationApi};
use tldcheck_domain::constants::{
    CACHE_INFO_PATH, DEFAULT_API_KEY_HEADER, DEFAULT_BASE_URL, GENERATE_KEY_PATH, HEALTH_PATH,
    LIST_KEYS_PATH, VALIDATE_TLD_PATH,
};
use tldcheck_domain::{
    ApiKeyRecord, CacheInfo, ClientConfig, HealthStatus, KeyIssued, ValidationRequest,
    ValidationResult,
};
use tracing::{debug, error, instrument, warn};
use url::Url;

use crate::errors::transport_error;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Service origin (e.g., "http://127.0.0.1:8000")
    pub base_url: String,
    /// Header carrying the credential
    pub api_key_header: String,
    /// Per-request timeout; `None` waits for the transport
    pub timeout: Option<Duration>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_header: DEFAULT_API_KEY_HEADER.to_string(),
            timeout: None,
        }
    }
}

impl From<&ClientConfig> for ApiClientConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key_header: config.api_key_header.clone(),
            timeout: config.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// HTTP implementation of [`ValidationApi`]
pub struct ApiClient {
    http_client: Arc<HttpClient>,
    credentials: Arc<dyn CredentialProvider>,
    base_url: String,
    key_header: HeaderName,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the base URL or header name is invalid
    /// or the HTTP client cannot be created
    pub fn new(
        config: ApiClientConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, ApiError> {
        let parsed = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL '{}': {e}", config.base_url)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "unsupported URL scheme '{}' in base URL",
                parsed.scheme()
            )));
        }

        let key_header = HeaderName::from_bytes(config.api_key_header.as_bytes()).map_err(|e| {
            ApiError::Config(format!("invalid API key header '{}': {e}", config.api_key_header))
        })?;

        let mut http = HttpClient::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            http = http.timeout(timeout);
        }
        let http_client = http
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {}", e)))?;

        Ok(Self {
            http_client: Arc::new(http_client),
            credentials,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            key_header,
        })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Send one request and decode the JSON response.
    ///
    /// Headers are applied in order: `Content-Type: application/json`, then
    /// `headers`, then the credential header when a credential is active. The
    /// credential header replaces any caller-supplied value of the same name.
    /// An empty success body decodes as `null`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Rejected`] for a non-success status, with the message
    ///   taken from the body's `detail`, then `message`, then a generic text
    /// - [`ApiError::Network`] when no response arrived
    /// - [`ApiError::Decode`] when a success body is not JSON
    #[instrument(skip_all, fields(method = %method, path = %path))]
    pub async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        headers: HeaderMap,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, has_body = body.is_some(), "dispatching request");

        let mut request =
            self.http_client.request(method, &url).headers(self.request_headers(headers)?);
        if let Some(body) = body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| ApiError::Config(format!("Failed to serialize body: {}", e)))?;
            request = request.body(bytes);
        }

        let response = self.http_client.send(request).await.inspect_err(|err| {
            error!(url = %url, error = %err, "request did not reach the validation service");
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|err| {
            error!(url = %url, error = %err, "failed to read response body");
            transport_error(err)
        })?;

        if !status.is_success() {
            let err = ApiError::from_error_body(status.as_u16(), &bytes);
            warn!(status = status.as_u16(), error = %err, "request rejected");
            return Err(err);
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Execute a GET request and decode the response
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let value = self.dispatch(Method::GET, path, None, HeaderMap::new()).await?;
        decode(value)
    }

    /// Execute a POST request with a JSON body and decode the response
    pub async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Config(format!("Failed to serialize body: {}", e)))?;
        let value = self.dispatch(Method::POST, path, Some(&body), HeaderMap::new()).await?;
        decode(value)
    }

    /// Execute a POST request without a body
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let value = self.dispatch(Method::POST, path, None, HeaderMap::new()).await?;
        decode(value)
    }

    fn request_headers(&self, extra: HeaderMap) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(extra);

        if let Some(credential) = self.credentials.credential() {
            let mut value = HeaderValue::from_str(credential.expose()).map_err(|_| {
                ApiError::Config("API key contains characters not allowed in a header".into())
            })?;
            value.set_sensitive(true);
            headers.insert(self.key_header.clone(), value);
        }

        Ok(headers)
    }
}

fn decode<R: DeserializeOwned>(value: Value) -> Result<R, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl ValidationApi for ApiClient {
    async fn validate(&self, request: &ValidationRequest) -> Result<ValidationResult, ApiError> {
        self.post(VALIDATE_TLD_PATH, request).await
    }

    async fn generate_key(&self) -> Result<KeyIssued, ApiError> {
        self.post_empty(GENERATE_KEY_PATH).await
    }

    async fn cache_info(&self) -> Result<CacheInfo, ApiError> {
        self.get(CACHE_INFO_PATH).await
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get(HEALTH_PATH).await
    }

    async fn list_keys(&self) -> Result<Vec<ApiKeyRecord>, ApiError> {
        self.get(LIST_KEYS_PATH).await
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    credentials: Option<Arc<dyn CredentialProvider>>,
}

impl ApiClientBuilder {
    /// Set configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the source of the active credential
    pub fn credentials(mut self, credentials: Arc<dyn CredentialProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if no credential source was set or the config is invalid
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let credentials = self
            .credentials
            .ok_or_else(|| ApiError::Config("Credential provider not set".to_string()))?;

        ApiClient::new(config, credentials)
    }
}
