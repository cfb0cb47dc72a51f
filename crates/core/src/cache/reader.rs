//! Fetch and interpret the service's cache metadata

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDateTime};
use tldcheck_domain::constants::LOCAL_TIMESTAMP_FORMAT;
use tldcheck_domain::{CacheInfo, CacheReport, Freshness, HealthStatus};
use tracing::warn;

use crate::errors::WorkflowError;
use crate::inflight::InFlight;
use crate::validation::ports::ValidationApi;

/// Naive layouts the service is known to emit (ISO 8601 and SQLite style)
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Reads cache state from the service. No credential is required by the
/// client; the session credential is still attached when present.
pub struct CacheInfoReader {
    api: Arc<dyn ValidationApi>,
    refresh_calls: InFlight,
}

impl CacheInfoReader {
    pub fn new(api: Arc<dyn ValidationApi>) -> Self {
        Self { api, refresh_calls: InFlight::new("refresh_cache_info") }
    }

    /// Fetch `/api/cache-info` and interpret it.
    ///
    /// Missing `last_updated` is reported as [`CacheReport::Unavailable`],
    /// not as an error.
    pub async fn refresh_cache_info(&self) -> Result<CacheReport, WorkflowError> {
        let ticket = self.refresh_calls.begin();
        let response = self.refresh_calls.settle(ticket, self.api.cache_info().await)?;
        let info =
            response.inspect_err(|err| warn!(error = %err, "failed to load cache info"))?;
        Ok(interpret_cache_info(info))
    }

    /// Fetch `/api/health`.
    pub async fn health(&self) -> Result<HealthStatus, WorkflowError> {
        Ok(self.api.health().await?)
    }
}

/// Turn the raw payload into a renderable report.
pub fn interpret_cache_info(info: CacheInfo) -> CacheReport {
    match info.last_updated.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => CacheReport::Available {
            tld_count: info.tld_count.unwrap_or(0),
            last_updated: format_local_timestamp(raw),
            freshness: Freshness::from(info.is_fresh),
        },
        None => CacheReport::Unavailable,
    }
}

/// Format a service timestamp as local date/time.
///
/// Offset timestamps are converted to the local zone; naive ones are taken as
/// local wall-clock time. Anything else is returned unchanged.
pub fn format_local_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Local).format(LOCAL_TIMESTAMP_FORMAT).to_string();
    }

    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .map_or_else(
            || {
                warn!(timestamp = raw, "unrecognised cache timestamp");
                raw.to_string()
            },
            |naive| naive.format(LOCAL_TIMESTAMP_FORMAT).to_string(),
        )
}
