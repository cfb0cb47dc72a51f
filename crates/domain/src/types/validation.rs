//! Validation request and result shapes

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which field of the validation request the user filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationField {
    Domain,
    Tld,
}

impl ValidationField {
    /// Build the request for this field. `input` must already be trimmed.
    pub fn request(self, input: impl Into<String>) -> ValidationRequest {
        match self {
            Self::Domain => ValidationRequest::Domain(input.into()),
            Self::Tld => ValidationRequest::Tld(input.into()),
        }
    }

    /// Instruction shown when the input is empty.
    pub fn missing_input_message(self) -> &'static str {
        match self {
            Self::Domain => "Please enter a domain name",
            Self::Tld => "Please enter a TLD",
        }
    }
}

/// Body of `POST /api/validate-tld`.
///
/// Serializes with exactly one field: `{"domain": ...}` or `{"tld": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationRequest {
    Domain(String),
    Tld(String),
}

impl ValidationRequest {
    pub fn value(&self) -> &str {
        match self {
            Self::Domain(value) | Self::Tld(value) => value,
        }
    }
}

/// Response of `POST /api/validate-tld`. The echoed `tld`/`domain` fields
/// are not shown and are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Failure,
}

/// What a renderer shows for a completed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub kind: OutcomeKind,
    /// Server message, forwarded verbatim
    pub message: String,
}

impl ValidationOutcome {
    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }
}

impl From<ValidationResult> for ValidationOutcome {
    fn from(result: ValidationResult) -> Self {
        let kind = if result.is_valid { OutcomeKind::Success } else { OutcomeKind::Failure };
        Self { kind, message: result.message }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            OutcomeKind::Success => write!(f, "Success: {}", self.message),
            OutcomeKind::Failure => write!(f, "Failure: {}", self.message),
        }
    }
}
