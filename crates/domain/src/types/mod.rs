//! Domain types exchanged with the validation service and handed to renderers

pub mod cache;
pub mod credential;
pub mod keys;
pub mod validation;

pub use cache::{CacheInfo, CacheReport, Freshness};
pub use credential::Credential;
pub use keys::{ApiKeyRecord, HealthStatus, KeyIssued};
pub use validation::{OutcomeKind, ValidationField, ValidationOutcome, ValidationRequest, ValidationResult};
