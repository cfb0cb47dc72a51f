//! # TLD Check Core
//!
//! Client business logic - no HTTP or keychain code.
//!
//! This crate contains:
//! - Port interfaces (traits) for the validation service and credential
//!   storage
//! - The credential session and Credential Manager
//! - The validation workflow and cache info reader
//!
//! ## Architecture Principles
//! - Only depends on `tldcheck-domain`
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod cache;
pub mod credentials;
pub mod errors;
pub mod inflight;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export specific items to avoid ambiguity
pub use cache::{interpret_cache_info, CacheInfoReader};
pub use credentials::ports::{CredentialProvider, CredentialStore};
pub use credentials::{CredentialManager, Session};
pub use errors::{ApiError, ApiErrorCategory, WorkflowError};
pub use inflight::{CallTicket, InFlight};
pub use validation::ports::ValidationApi;
pub use validation::ValidationService;
