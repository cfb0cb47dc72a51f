use std::time::Duration;

use anyhow::anyhow;
use tldcheck_core::{ApiErrorCategory, WorkflowError};
use tldcheck_domain::TldCheckError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over `default_level`.
///
/// Logs go to stderr so rendered results on stdout stay clean.
///
/// # Errors
/// Fails if `default_level` is not a valid filter or a subscriber is already
/// installed.
pub fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|e| anyhow!("invalid log level '{default_level}': {e}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}

/// Log the outcome of a command execution with structured fields.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `TldCheckError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &TldCheckError) -> &'static str {
    match error {
        TldCheckError::Config(_) => "config",
        TldCheckError::Network(_) => "network",
        TldCheckError::Auth(_) => "auth",
        TldCheckError::Storage(_) => "storage",
        TldCheckError::Security(_) => "security",
        TldCheckError::NotFound(_) => "not_found",
        TldCheckError::InvalidInput(_) => "invalid_input",
        TldCheckError::Internal(_) => "internal",
    }
}

/// Stable label for a workflow failure.
pub fn workflow_error_label(error: &WorkflowError) -> &'static str {
    match error {
        WorkflowError::MissingInput(_) => "missing_input",
        WorkflowError::MissingCredential => "missing_credential",
        WorkflowError::Superseded => "superseded",
        WorkflowError::Storage(err) => error_label(err),
        WorkflowError::Api(err) => match err.category() {
            ApiErrorCategory::Authentication => "auth",
            ApiErrorCategory::RateLimit => "rate_limit",
            ApiErrorCategory::Server => "server",
            ApiErrorCategory::Client => "client",
            ApiErrorCategory::Network => "network",
            ApiErrorCategory::Config => "config",
        },
    }
}
