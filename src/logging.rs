// src/logging.rs
// =============================================================================
// Logging setup.
//
// Logs go to stderr so they never mix with the order JSON on stdout.
// RUST_LOG wins when set, otherwise the level comes from -v flags.
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: u8) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    tracing::debug!("order-lookup logging initialized");

    Ok(())
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,order_lookup=debug",
        _ => "trace",
    }
}
