//! Key issuance, key listing and health payloads

use serde::{Deserialize, Serialize};

/// Response of `POST /api/generate-key`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyIssued {
    pub key: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// One row of `GET /api/keys`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyRecord {
    pub key: String,
    /// Server-formatted creation timestamp, kept verbatim
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub usage_count: u64,
    #[serde(default)]
    pub is_active: bool,
}

/// Response of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub cache: Option<serde_json::Value>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_listing_tolerates_missing_columns() {
        let record: ApiKeyRecord = serde_json::from_value(serde_json::json!({
            "key": "k-1",
            "usage_count": 3
        }))
        .unwrap();

        assert_eq!(record.usage_count, 3);
        assert!(!record.is_active);
        assert_eq!(record.created_at, None);
    }
}
