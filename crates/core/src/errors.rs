//! Error types for service calls and client workflows
//!
//! [`ApiError`] is what the request dispatcher produces. [`WorkflowError`] is
//! what the workflows hand to a renderer: local precondition failures, the
//! dispatcher's error, or a discarded stale call.

use serde_json::Value;
use thiserror::Error;
use tldcheck_domain::constants::GENERIC_FAILURE_MESSAGE;
use tldcheck_domain::{TldCheckError, ValidationField};

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Rejected credential (401, 403)
    Authentication,
    /// Rate limiting (429)
    RateLimit,
    /// Server errors (5xx)
    Server,
    /// Other rejections (4xx)
    Client,
    /// Connection failures and malformed responses
    Network,
    /// Client misconfiguration
    Config,
}

/// Request dispatch errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status. Displays only the
    /// message extracted from the response body.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("{0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Build the error for a non-success response from its raw body.
    pub fn from_error_body(status: u16, body: &[u8]) -> Self {
        Self::Rejected { status, message: extract_error_message(body) }
    }

    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Rejected { status: 401 | 403, .. } => ApiErrorCategory::Authentication,
            Self::Rejected { status: 429, .. } => ApiErrorCategory::RateLimit,
            Self::Rejected { status, .. } if *status >= 500 => ApiErrorCategory::Server,
            Self::Rejected { .. } => ApiErrorCategory::Client,
            Self::Network(_) | Self::Decode(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// The server refused the credential.
    pub fn is_auth_failure(&self) -> bool {
        self.category() == ApiErrorCategory::Authentication
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Extract the user-facing message from an error response body.
///
/// Order: `detail`, then `message`, then [`GENERIC_FAILURE_MESSAGE`]. Only a
/// JSON object counts as an error payload. Empty strings are skipped. A
/// `detail` list of validation entries (`[{"msg": ..}]`) is joined with
/// `"; "`.
pub fn extract_error_message(body: &[u8]) -> String {
    let payload = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        _ => return GENERIC_FAILURE_MESSAGE.to_string(),
    };

    field_message(payload.get("detail"))
        .or_else(|| field_message(payload.get("message")))
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}

fn field_message(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Array(entries) => {
            let messages: Vec<&str> =
                entries.iter().filter_map(|entry| entry.get("msg").and_then(Value::as_str)).collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

/// Workflow failures handed to renderers
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Input was empty after trimming; nothing was sent.
    #[error("{}", .0.missing_input_message())]
    MissingInput(ValidationField),

    /// No credential in the session; nothing was sent.
    #[error("Please generate an API key first")]
    MissingCredential,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] TldCheckError),

    /// A newer call of the same workflow started before this one resolved;
    /// its result was discarded.
    #[error("Superseded by a newer request")]
    Superseded,
}

impl WorkflowError {
    /// Detected locally, before any network call.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::MissingInput(_) | Self::MissingCredential)
    }
}
