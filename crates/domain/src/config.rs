//! Client configuration structures
//!
//! Loaded by `tldcheck_infra::config` from environment variables and config
//! files. Every field has a default so partial files are accepted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CREDENTIAL_ENTRY_NAME, CREDENTIAL_SERVICE_NAME, DEFAULT_API_KEY_HEADER, DEFAULT_BASE_URL,
};
use crate::impl_domain_status_conversions;

/// Top-level client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin of the validation service (e.g., "http://127.0.0.1:8000")
    pub base_url: String,
    /// Header carrying the raw credential
    pub api_key_header: String,
    /// Optional per-request timeout in seconds; `None` means no timeout
    pub request_timeout_secs: Option<u64>,
    /// Default tracing filter when `RUST_LOG` is not set
    pub log_level: String,
    /// Where the active credential is persisted
    pub credential: CredentialConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_header: DEFAULT_API_KEY_HEADER.to_string(),
            request_timeout_secs: None,
            log_level: "warn".to_string(),
            credential: CredentialConfig::default(),
        }
    }
}

/// Credential persistence settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialConfig {
    pub backend: CredentialBackend,
    /// Keyring service name
    pub service_name: String,
    /// Fixed name the credential is stored under
    pub entry_name: String,
    /// File used by the `file` backend; resolved to the user config directory
    /// when unset
    pub file_path: Option<PathBuf>,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            backend: CredentialBackend::File,
            service_name: CREDENTIAL_SERVICE_NAME.to_string(),
            entry_name: CREDENTIAL_ENTRY_NAME.to_string(),
            file_path: None,
        }
    }
}

/// Durable storage used for the active credential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialBackend {
    /// Platform credential store: macOS Keychain, Windows Credential Manager,
    /// or the kernel keyring on Linux (kept until reboot)
    Keyring,
    /// JSON file on disk
    #[default]
    File,
    /// Process memory only; nothing survives a restart
    Memory,
}

impl_domain_status_conversions!(CredentialBackend {
    Keyring => "keyring",
    File => "file",
    Memory => "memory",
});
