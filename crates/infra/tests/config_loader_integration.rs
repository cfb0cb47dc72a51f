//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use tempfile::NamedTempFile;
use tldcheck_domain::CredentialBackend;
use tldcheck_infra::config;

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "base_url": "https://tld.example.org",
        "api_key_header": "X-API-Key",
        "request_timeout_secs": 10,
        "log_level": "info",
        "credential": {
            "backend": "file",
            "service_name": "tld-validator",
            "entry_name": "tld-api-key",
            "file_path": "/tmp/tldcheck-integration/credentials.json"
        }
    }"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("json");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(&path).ok();
    assert!(result.is_ok(), "Failed to load config from JSON file: {:?}", result.err());

    let config = result.unwrap();
    assert_eq!(config.base_url, "https://tld.example.org");
    assert_eq!(config.request_timeout_secs, Some(10));
    assert_eq!(config.log_level, "info");
    assert_eq!(config.credential.backend, CredentialBackend::File);
    assert_eq!(
        config.credential.file_path.as_deref(),
        Some(std::path::Path::new("/tmp/tldcheck-integration/credentials.json"))
    );
    assert!(config::validate(&config).is_ok());
}

#[test]
fn test_load_config_from_toml_file() {
    let toml_content = r#"
base_url = "http://10.0.0.5:8000"
api_key_header = "X-Tld-Key"

[credential]
backend = "memory"
"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(toml_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("toml");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(&path).ok();

    let config = result.expect("Failed to load config from TOML file");
    assert_eq!(config.base_url, "http://10.0.0.5:8000");
    assert_eq!(config.api_key_header, "X-Tld-Key");
    assert_eq!(config.credential.backend, CredentialBackend::Memory);
    assert_eq!(config.credential.entry_name, "tld-api-key");
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_load_config_invalid_toml() {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(b"base_url = [unterminated").expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("toml");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(&path).ok();

    assert!(result.is_err(), "Should fail with invalid TOML");
    assert!(result.unwrap_err().to_string().contains("Invalid TOML"));
}
