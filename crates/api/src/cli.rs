//! Command-line arguments
//!
//! Flags override the config file and `TLDCHECK_*` environment variables.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tldcheck_domain::{ClientConfig, CredentialBackend, Result};
use tldcheck_infra::config;

use crate::commands::Action;

#[derive(Parser, Debug)]
#[command(name = "tldcheck", version, about = "Client for the TLD validation service")]
pub struct Cli {
    /// Config file (TOML or JSON); probed when omitted
    #[arg(long, global = true, env = "TLDCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Service origin, e.g. http://127.0.0.1:8000
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Header carrying the API key
    #[arg(long, global = true)]
    pub api_key_header: Option<String>,

    /// Request timeout in seconds (0 disables it)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Credential storage: keyring, file or memory
    #[arg(long, global = true)]
    pub credential_backend: Option<CredentialBackend>,

    /// Credential file for the file backend
    #[arg(long, global = true)]
    pub credential_file: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate the TLD of a full domain name
    ValidateDomain { domain: String },
    /// Validate a bare TLD
    ValidateTld { tld: String },
    /// Request a new API key and save it
    GenerateKey,
    /// Show the service's TLD cache status
    CacheInfo,
    /// Check service health
    Health,
    /// List API keys known to the service
    Keys,
    /// Remove the saved API key
    Forget,
    /// Read commands from stdin (default)
    Interactive,
}

impl Command {
    /// The action a one-shot command runs; `None` for interactive mode.
    pub fn action(&self) -> Option<Action> {
        match self {
            Self::ValidateDomain { domain } => Some(Action::ValidateDomain(domain.clone())),
            Self::ValidateTld { tld } => Some(Action::ValidateTld(tld.clone())),
            Self::GenerateKey => Some(Action::GenerateKey),
            Self::CacheInfo => Some(Action::CacheInfo),
            Self::Health => Some(Action::Health),
            Self::Keys => Some(Action::ListKeys),
            Self::Forget => Some(Action::Forget),
            Self::Interactive => None,
        }
    }
}

impl Cli {
    /// Load file and environment configuration, then apply flags.
    ///
    /// # Errors
    /// Returns `TldCheckError::Config` if any layer is invalid.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let loaded = config::load_with(self.config.clone())?;
        let merged = self.apply_overrides(loaded);
        config::validate(&merged)?;
        Ok(merged)
    }

    fn apply_overrides(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(header) = &self.api_key_header {
            config.api_key_header = header.clone();
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = (timeout > 0).then_some(timeout);
        }
        if let Some(backend) = self.credential_backend {
            config.credential.backend = backend;
        }
        if let Some(file) = &self.credential_file {
            config.credential.file_path = Some(file.clone());
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        config
    }
}
