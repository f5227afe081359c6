// src/main.rs
// =============================================================================
// Entry point of the order-lookup CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr)
// 3. Look up the orders given on the command line, or read ids from stdin
// 4. Exit with a code summarizing the worst outcome:
//    0 = every order found, 1 = the service answered with an error status,
//    2 = empty id, service unreachable, or internal error
// =============================================================================

mod action;
mod cli;
mod logging;
mod lookup;
mod output;
mod render;

#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use clap::Parser;
use futures::stream::{self, StreamExt};
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::warn;

use action::lookup_and_render;
use cli::Cli;
use lookup::{trim_id, LookupError, OrderClient};
use output::TerminalOutput;
use render::Locale;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("Warning: {:#}", e);
    }

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<i32> {
    let client = OrderClient::new(cli.base_url)?;

    if cli.order_uids.is_empty() {
        let stdin = BufReader::new(tokio::io::stdin());
        lookup_lines(client, stdin, cli.lang).await
    } else {
        lookup_all(&client, cli.order_uids, cli.lang).await
    }
}

// Looks up every id from the command line concurrently
//
// Results are printed as they arrive, so the order on screen may differ from
// the order of the arguments. With more than one id each block is labelled.
async fn lookup_all(client: &OrderClient, ids: Vec<String>, locale: Locale) -> Result<i32> {
    let labelled = ids.len() > 1;
    let concurrency = ids.len().max(1);

    let worst = stream::iter(ids)
        .map(move |raw_id| async move {
            let out = if labelled {
                TerminalOutput::labelled(trim_id(&raw_id))
            } else {
                TerminalOutput::new()
            };
            let outcome = lookup_and_render(client, &raw_id, locale, &out).await;
            exit_code(&outcome)
        })
        .buffer_unordered(concurrency)
        .fold(0, |worst, code| async move { worst.max(code) })
        .await;

    Ok(worst)
}

// Reads ids one per line and looks each up in its own task
//
// Reading continues while earlier requests are still in flight. At the end
// of input we wait for the outstanding lookups before returning.
async fn lookup_lines<R>(client: OrderClient, reader: R, locale: Locale) -> Result<i32>
where
    R: AsyncBufRead + Unpin,
{
    let client = Arc::new(client);
    let mut lines = reader.lines();
    let mut tasks = JoinSet::new();

    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let client = Arc::clone(&client);
        tasks.spawn(async move {
            let out = TerminalOutput::new();
            let outcome = lookup_and_render(&client, &line, locale, &out).await;
            exit_code(&outcome)
        });
    }

    Ok(drain_tasks(tasks).await)
}

// Waits for every lookup task and returns the worst exit code
//
// A task that panicked counts as an internal error, the others still finish.
async fn drain_tasks(mut tasks: JoinSet<i32>) -> i32 {
    let mut worst = 0;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(code) => worst = worst.max(code),
            Err(e) => {
                warn!(error = %e, "lookup task failed");
                worst = worst.max(2);
            }
        }
    }
    worst
}

fn exit_code(outcome: &Result<Value, LookupError>) -> i32 {
    match outcome {
        Ok(_) => 0,
        Err(LookupError::Status(_)) => 1,
        Err(LookupError::EmptyId)
        | Err(LookupError::Transport(_))
        | Err(LookupError::InvalidUrl(_)) => 2,
    }
}
