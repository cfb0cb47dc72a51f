//! # TLD Check Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The HTTP request dispatcher for the validation service
//! - Credential stores (platform keychain, JSON file, memory)
//! - Configuration loading from files and environment variables
//!
//! ## Architecture
//! - Implements traits defined in `tldcheck-core`
//! - Depends on `tldcheck-domain` and `tldcheck-core`
//! - Contains all "impure" code (network, filesystem, keychain)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod storage;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use errors::InfraError;
pub use http::HttpClient;
pub use storage::{
    build_credential_store, resolve_credential_path, FileCredentialStore, KeyringCredentialStore,
    MemoryCredentialStore,
};
