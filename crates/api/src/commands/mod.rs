//! Commands shared by one-shot and interactive mode

use std::time::Instant;

use crate::context::AppContext;
use crate::render::{self, Rendered};
use crate::utils::logging::log_command_execution;

pub const HELP_TEXT: &str = "\
Commands:
  domain <name>   Validate the TLD of a domain name
  tld <tld>       Validate a bare TLD
  generate        Request a new API key and save it
  cache           Refresh cache information
  health          Check service health
  keys            List API keys known to the service
  forget          Remove the saved API key
  help            Show this help
  quit            Exit";

/// One user action against the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ValidateDomain(String),
    ValidateTld(String),
    GenerateKey,
    CacheInfo,
    Health,
    ListKeys,
    Forget,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ValidateDomain(_) => "validate_domain",
            Self::ValidateTld(_) => "validate_tld",
            Self::GenerateKey => "generate_key",
            Self::CacheInfo => "cache_info",
            Self::Health => "health",
            Self::ListKeys => "list_keys",
            Self::Forget => "forget",
        }
    }
}

/// A parsed interactive line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Run(Action),
    Help,
    Quit,
    Blank,
}

/// Parse one interactive line. A missing argument is passed on as empty so
/// the workflow reports it.
///
/// # Errors
/// Returns the message to show for an unknown command.
pub fn parse_line(line: &str) -> Result<Input, String> {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let input = match command.to_ascii_lowercase().as_str() {
        "" => Input::Blank,
        "domain" | "d" => Input::Run(Action::ValidateDomain(argument.to_string())),
        "tld" | "t" => Input::Run(Action::ValidateTld(argument.to_string())),
        "generate" | "generate-key" => Input::Run(Action::GenerateKey),
        "cache" | "cache-info" | "refresh" => Input::Run(Action::CacheInfo),
        "health" => Input::Run(Action::Health),
        "keys" => Input::Run(Action::ListKeys),
        "forget" => Input::Run(Action::Forget),
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => return Err(format!("Unknown command '{other}'. Type 'help' for commands.")),
    };
    Ok(input)
}

/// Run `action` and render its result; `None` when a newer call of the same
/// workflow superseded it.
pub async fn execute(ctx: &AppContext, action: Action) -> Option<Rendered> {
    let command = action.name();
    let started = Instant::now();

    let rendered = match action {
        Action::ValidateDomain(input) => {
            render::validation(ctx.validation.validate_domain(&input).await)
        }
        Action::ValidateTld(input) => render::validation(ctx.validation.validate_tld(&input).await),
        Action::GenerateKey => render::generated_key(ctx.credentials.generate().await),
        Action::CacheInfo => render::cache_info(ctx.cache.refresh_cache_info().await),
        Action::Health => render::health(ctx.cache.health().await),
        Action::ListKeys => render::keys(ctx.credentials.list_keys().await),
        Action::Forget => render::forgotten(ctx.credentials.forget()),
    };

    match &rendered {
        Some(output) => log_command_execution(command, started.elapsed(), !output.is_error()),
        None => tracing::debug!(command, "result superseded by a newer call"),
    }
    rendered
}
