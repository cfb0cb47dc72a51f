//! # TLD Check Domain
//!
//! Domain types for the TLD validation client.
//!
//! This crate contains:
//! - Wire types exchanged with the validation service
//! - Outcome types handed to renderers
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other tldcheck crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
