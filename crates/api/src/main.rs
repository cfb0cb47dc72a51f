//! TLD Check - command-line client for the TLD validation service

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tldcheck_app::utils::logging::init_tracing;
use tldcheck_app::{execute, interactive, AppContext, Cli};
use tracing::{debug, warn};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env before parsing so TLDCHECK_* and RUST_LOG apply
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = cli.client_config().context("failed to load configuration")?;
    init_tracing(&config.log_level)?;

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!(error = %err, "could not load .env file"),
    }

    let ctx = Arc::new(AppContext::new(config).context("failed to initialize client")?);

    match cli.command.as_ref().and_then(|command| command.action()) {
        Some(action) => {
            let failed = match execute(&ctx, action).await {
                Some(rendered) => {
                    rendered.emit();
                    rendered.is_error()
                }
                None => false,
            };
            Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
        }
        None => {
            interactive::run(ctx).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
