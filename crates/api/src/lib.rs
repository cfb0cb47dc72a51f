//! # TLD Check App
//!
//! Command-line application layer - commands, rendering and entry point.
//!
//! This crate contains:
//! - CLI argument parsing
//! - Application context (dependency injection)
//! - Commands shared by one-shot and interactive mode
//! - Rendering of workflow results for the terminal
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod cli;
pub mod commands;
pub mod context;
pub mod interactive;
pub mod render;
pub mod utils;

// Re-export for convenience
pub use cli::{Cli, Command};
pub use commands::{execute, parse_line, Action, Input};
pub use context::AppContext;
pub use render::{Rendered, Style};
