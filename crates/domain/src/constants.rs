//! Client constants
//!
//! Wire-level names shared between the dispatcher, the credential stores and
//! the configuration defaults.

// Endpoints
pub const VALIDATE_TLD_PATH: &str = "/api/validate-tld";
pub const GENERATE_KEY_PATH: &str = "/api/generate-key";
pub const CACHE_INFO_PATH: &str = "/api/cache-info";
pub const HEALTH_PATH: &str = "/api/health";
pub const LIST_KEYS_PATH: &str = "/api/keys";

// Credential
pub const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";
pub const CREDENTIAL_ENTRY_NAME: &str = "tld-api-key";
pub const CREDENTIAL_SERVICE_NAME: &str = "tld-validator";
/// Characters of a credential that may appear in logs or `Debug` output.
pub const CREDENTIAL_LOG_PREFIX_LEN: usize = 8;

// Dispatcher
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

// Rendering
pub const LOCAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
