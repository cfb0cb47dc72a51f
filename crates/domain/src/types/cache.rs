//! Server cache metadata as seen by the client

use std::fmt;

use serde::{Deserialize, Serialize};

/// Response of `GET /api/cache-info`. Every field may be missing or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheInfo {
    #[serde(default)]
    pub tld_count: Option<u64>,
    /// Server timestamp, RFC 3339 or naive ISO 8601
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub is_fresh: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Fresh,
    Stale,
}

impl From<Option<bool>> for Freshness {
    fn from(is_fresh: Option<bool>) -> Self {
        if is_fresh.unwrap_or(false) {
            Self::Fresh
        } else {
            Self::Stale
        }
    }
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fresh => f.write_str("Fresh"),
            Self::Stale => f.write_str("Stale"),
        }
    }
}

/// Interpreted cache state, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheReport {
    Available {
        tld_count: u64,
        /// Local date/time, already formatted
        last_updated: String,
        freshness: Freshness,
    },
    Unavailable,
}

impl CacheReport {
    pub const UNAVAILABLE_MESSAGE: &'static str = "No cache information available";
}

impl fmt::Display for CacheReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available { tld_count, last_updated, freshness } => {
                writeln!(f, "Total TLDs: {tld_count}")?;
                writeln!(f, "Last Updated: {last_updated}")?;
                write!(f, "Status: {freshness}")
            }
            Self::Unavailable => f.write_str(Self::UNAVAILABLE_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_fields_deserialize_as_absent() {
        let info: CacheInfo = serde_json::from_str(
            r#"{"tld_count": null, "last_updated": null, "is_fresh": null}"#,
        )
        .unwrap();
        assert_eq!(info, CacheInfo::default());
        assert_eq!(Freshness::from(info.is_fresh), Freshness::Stale);
    }

    #[test]
    fn report_renders_all_lines() {
        let report = CacheReport::Available {
            tld_count: 1500,
            last_updated: "2024-01-01 00:00:00".into(),
            freshness: Freshness::Fresh,
        };
        assert_eq!(
            report.to_string(),
            "Total TLDs: 1500\nLast Updated: 2024-01-01 00:00:00\nStatus: Fresh"
        );
        assert_eq!(CacheReport::Unavailable.to_string(), "No cache information available");
    }
}
