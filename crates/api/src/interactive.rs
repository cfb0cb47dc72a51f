//! Line-oriented interactive session
//!
//! Each command runs as its own task, so a slow request never blocks input.
//! When two calls of the same workflow overlap, only the newer one prints.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinSet};
use tracing::error;

use crate::commands::{execute, parse_line, Action, Input, HELP_TEXT};
use crate::context::AppContext;
use crate::render::Rendered;

/// Run on stdin/stdout/stderr until `quit` or end of input.
///
/// # Errors
/// Fails only if the terminal cannot be read or written.
pub async fn run(ctx: Arc<AppContext>) -> anyhow::Result<()> {
    let input = BufReader::new(tokio::io::stdin());
    run_with(ctx, input, io::stdout(), io::stderr()).await
}

/// Read commands from `input` until `quit` or end of input, then wait for
/// outstanding requests. Results print as their tasks finish; errors go to
/// `err`, everything else to `out`.
///
/// # Errors
/// Fails if `input` cannot be read or an output stream cannot be written.
pub async fn run_with<R, O, E>(
    ctx: Arc<AppContext>,
    input: R,
    mut out: O,
    mut err: E,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    O: Write,
    E: Write,
{
    writeln!(out, "TLD validator at {}. Type 'help' for commands.", ctx.config.base_url)?;

    let mut tasks = JoinSet::new();
    tasks.spawn(run_action(ctx.clone(), Action::CacheInfo));

    let mut lines = input.lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read input")? else {
                    break;
                };
                match parse_line(&line) {
                    Ok(Input::Run(action)) => {
                        tasks.spawn(run_action(ctx.clone(), action));
                    }
                    Ok(Input::Help) => writeln!(out, "{HELP_TEXT}")?,
                    Ok(Input::Quit) => break,
                    Ok(Input::Blank) => {}
                    Err(message) => writeln!(err, "{message}")?,
                }
            }
            Some(joined) = tasks.join_next() => report(joined, &mut out, &mut err)?,
        }
    }

    while let Some(joined) = tasks.join_next().await {
        report(joined, &mut out, &mut err)?;
    }
    Ok(())
}

async fn run_action(ctx: Arc<AppContext>, action: Action) -> Option<Rendered> {
    execute(&ctx, action).await
}

fn report(
    joined: Result<Option<Rendered>, JoinError>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match joined {
        Ok(Some(rendered)) => rendered.write_to(out, err),
        Ok(None) => Ok(()),
        Err(join_err) => {
            error!(error = %join_err, "command task failed");
            Ok(())
        }
    }
}
