//! Domain/TLD validation workflow

pub mod ports;
pub mod service;

pub use service::ValidationService;
