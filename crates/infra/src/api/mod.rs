//! HTTP client for the TLD validation service
//!
//! [`ApiClient`] is the request dispatcher: every workflow reaches the
//! service through it. Requests are sent once; there is no retry, caching
//! or circuit breaking.

pub mod client;

pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
