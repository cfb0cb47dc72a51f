//! Configuration loader
//!
//! Loads client configuration from a config file and environment variables.
//!
//! ## Loading Strategy
//! 1. Start from [`ClientConfig::default`]
//! 2. Replace it with the first config file found (if any)
//! 3. Overlay every environment variable that is set
//! 4. Validate the result
//!
//! ## Environment Variables
//! - `TLDCHECK_BASE_URL`: Service origin
//! - `TLDCHECK_API_KEY_HEADER`: Header carrying the API key
//! - `TLDCHECK_REQUEST_TIMEOUT`: Request timeout in seconds (`0` disables it)
//! - `TLDCHECK_LOG_LEVEL`: Default tracing filter
//! - `TLDCHECK_CREDENTIAL_BACKEND`: `keyring`, `file` or `memory`
//! - `TLDCHECK_CREDENTIAL_FILE`: Credential file for the `file` backend
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./tldcheck.toml`, `./tldcheck.json`
//! 2. The same names in the parent and grandparent directories
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use tldcheck_domain::{ClientConfig, CredentialBackend, Result, TldCheckError};
use url::Url;

pub const ENV_BASE_URL: &str = "TLDCHECK_BASE_URL";
pub const ENV_API_KEY_HEADER: &str = "TLDCHECK_API_KEY_HEADER";
pub const ENV_REQUEST_TIMEOUT: &str = "TLDCHECK_REQUEST_TIMEOUT";
pub const ENV_LOG_LEVEL: &str = "TLDCHECK_LOG_LEVEL";
pub const ENV_CREDENTIAL_BACKEND: &str = "TLDCHECK_CREDENTIAL_BACKEND";
pub const ENV_CREDENTIAL_FILE: &str = "TLDCHECK_CREDENTIAL_FILE";

const CONFIG_FILE_NAMES: [&str; 2] = ["tldcheck.toml", "tldcheck.json"];

/// Load configuration from the probed config file (if any) and the
/// environment.
///
/// # Errors
/// Returns `TldCheckError::Config` if a file or variable is malformed or the
/// merged configuration is invalid.
pub fn load() -> Result<ClientConfig> {
    load_with(None)
}

/// Like [`load`], but reads `path` instead of probing when one is given.
///
/// # Errors
/// Returns `TldCheckError::Config` if `path` does not exist, in addition to
/// the errors of [`load`].
pub fn load_with(path: Option<PathBuf>) -> Result<ClientConfig> {
    let base = match path {
        Some(path) => load_from_file(Some(path))?,
        None => match probe_config_paths() {
            Some(found) => load_from_file(Some(found))?,
            None => {
                tracing::debug!("No config file found, using defaults");
                ClientConfig::default()
            }
        },
    };

    let config = apply_env_overrides(base)?;
    validate(&config)?;
    Ok(config)
}

/// Load configuration from environment variables over the defaults.
///
/// # Errors
/// Returns `TldCheckError::Config` if a variable has an invalid value.
pub fn load_from_env() -> Result<ClientConfig> {
    apply_env_overrides(ClientConfig::default())
}

/// Overlay every `TLDCHECK_*` variable that is set and non-empty.
///
/// # Errors
/// Returns `TldCheckError::Config` if a variable has an invalid value.
pub fn apply_env_overrides(mut config: ClientConfig) -> Result<ClientConfig> {
    if let Some(base_url) = env_var(ENV_BASE_URL) {
        config.base_url = base_url;
    }
    if let Some(header) = env_var(ENV_API_KEY_HEADER) {
        config.api_key_header = header;
    }
    if let Some(timeout) = env_var(ENV_REQUEST_TIMEOUT) {
        let secs = timeout.parse::<u64>().map_err(|e| {
            TldCheckError::Config(format!("Invalid {ENV_REQUEST_TIMEOUT} '{timeout}': {e}"))
        })?;
        config.request_timeout_secs = (secs > 0).then_some(secs);
    }
    if let Some(level) = env_var(ENV_LOG_LEVEL) {
        config.log_level = level;
    }
    if let Some(backend) = env_var(ENV_CREDENTIAL_BACKEND) {
        config.credential.backend = backend.parse::<CredentialBackend>().map_err(|_| {
            TldCheckError::Config(format!(
                "Invalid {ENV_CREDENTIAL_BACKEND} '{backend}': expected keyring, file or memory"
            ))
        })?;
    }
    if let Some(file) = env_var(ENV_CREDENTIAL_FILE) {
        config.credential.file_path = Some(PathBuf::from(file));
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Fields missing from the file keep their defaults.
///
/// # Errors
/// Returns `TldCheckError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(TldCheckError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            TldCheckError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| TldCheckError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| TldCheckError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| TldCheckError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(TldCheckError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    find_config_in(&dirs)
}

/// First `tldcheck.*` file in `dirs`, searched in order.
fn find_config_in(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Check the merged configuration before any client is built.
///
/// # Errors
/// Returns `TldCheckError::Config` naming the first invalid field.
pub fn validate(config: &ClientConfig) -> Result<()> {
    let url = Url::parse(&config.base_url).map_err(|e| {
        TldCheckError::Config(format!("Invalid base_url '{}': {}", config.base_url, e))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(TldCheckError::Config(format!(
            "Invalid base_url '{}': scheme must be http or https",
            config.base_url
        )));
    }

    let header = config.api_key_header.trim();
    if header.is_empty() || !header.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_') {
        return Err(TldCheckError::Config(format!(
            "Invalid api_key_header '{}'",
            config.api_key_header
        )));
    }

    if config.credential.entry_name.trim().is_empty() {
        return Err(TldCheckError::Config("credential.entry_name must not be empty".into()));
    }

    Ok(())
}

/// Read an environment variable, treating empty values as unset.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
