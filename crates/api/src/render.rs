//! Terminal rendering of workflow results
//!
//! Every renderer returns `None` for a superseded call: a newer call of the
//! same workflow owns the display.

use std::fmt;
use std::io::{self, Write};

use tldcheck_core::{interpret_cache_info, WorkflowError};
use tldcheck_domain::{
    ApiKeyRecord, CacheInfo, CacheReport, Credential, HealthStatus, ValidationOutcome,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Success,
    Error,
    Info,
}

/// Text ready to print, with the style of the result area it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub style: Style,
    pub text: String,
}

impl Rendered {
    pub fn success(text: impl Into<String>) -> Self {
        Self { style: Style::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { style: Style::Error, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { style: Style::Info, text: text.into() }
    }

    pub fn is_error(&self) -> bool {
        self.style == Style::Error
    }

    /// Errors go to stderr, everything else to stdout.
    pub fn emit(&self) {
        if self.is_error() {
            eprintln!("{}", self.text);
        } else {
            println!("{}", self.text);
        }
    }

    /// [`Rendered::emit`] against explicit output streams.
    ///
    /// # Errors
    /// Propagates write failures.
    pub fn write_to(&self, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
        if self.is_error() {
            writeln!(err, "{}", self.text)
        } else {
            writeln!(out, "{}", self.text)
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Precondition messages are shown as-is; everything else gets `prefix`.
fn failure(err: WorkflowError, prefix: &str) -> Option<Rendered> {
    match err {
        WorkflowError::Superseded => None,
        err if err.is_precondition() => Some(Rendered::error(err.to_string())),
        err => Some(Rendered::error(format!("{prefix}{err}"))),
    }
}

pub fn validation(result: Result<ValidationOutcome, WorkflowError>) -> Option<Rendered> {
    match result {
        Ok(outcome) if outcome.is_success() => Some(Rendered::success(outcome.to_string())),
        Ok(outcome) => Some(Rendered::error(outcome.to_string())),
        Err(err) => failure(err, "Error: "),
    }
}

pub fn generated_key(result: Result<Credential, WorkflowError>) -> Option<Rendered> {
    match result {
        Ok(credential) => Some(Rendered::success(format!(
            "Generated API Key: {}\n\nSave this key! It won't be shown again.",
            credential.expose()
        ))),
        Err(err) => failure(err, "Error: "),
    }
}

pub fn cache_info(result: Result<CacheReport, WorkflowError>) -> Option<Rendered> {
    match result {
        Ok(report) => Some(Rendered::info(report.to_string())),
        Err(err) => failure(err, "Error loading cache info: "),
    }
}

pub fn health(result: Result<HealthStatus, WorkflowError>) -> Option<Rendered> {
    let status = match result {
        Ok(status) => status,
        Err(err) => return failure(err, "Error: "),
    };

    let mut text = format!("Service: {}", status.status);
    let report = status
        .cache
        .clone()
        .and_then(|cache| serde_json::from_value::<CacheInfo>(cache).ok())
        .map(interpret_cache_info);
    if let Some(report) = report {
        text.push('\n');
        text.push_str(&report.to_string());
    }

    Some(if status.is_healthy() { Rendered::success(text) } else { Rendered::error(text) })
}

pub fn keys(result: Result<Vec<ApiKeyRecord>, WorkflowError>) -> Option<Rendered> {
    let records = match result {
        Ok(records) => records,
        Err(err) => return failure(err, "Error: "),
    };

    if records.is_empty() {
        return Some(Rendered::info("No API keys"));
    }

    let lines: Vec<String> = records
        .iter()
        .map(|record| {
            format!(
                "{}  created {}  used {}x  {}",
                Credential::new(record.key.as_str()).fingerprint(),
                record.created_at.as_deref().unwrap_or("-"),
                record.usage_count,
                if record.is_active { "active" } else { "inactive" }
            )
        })
        .collect();
    Some(Rendered::info(lines.join("\n")))
}

pub fn forgotten(result: Result<(), WorkflowError>) -> Option<Rendered> {
    match result {
        Ok(()) => Some(Rendered::info("Saved API key removed")),
        Err(err) => failure(err, "Error: "),
    }
}
