//! Credential lifecycle: the in-memory session, its durable store, and the
//! manager that acquires new keys from the service

pub mod manager;
pub mod ports;
pub mod session;

pub use manager::CredentialManager;
pub use session::Session;
