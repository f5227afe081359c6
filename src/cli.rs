// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// Every option can also come from an environment variable, which is handy
// when the tool runs next to the order service in the same container:
// - ORDER_LOOKUP_URL   base URL of the order service
// - ORDER_LOOKUP_LANG  message language (ru, en)
// =============================================================================

use clap::{ArgAction, Parser};
use url::Url;

use crate::render::Locale;

#[derive(Parser, Debug)]
#[command(
    name = "order-lookup",
    version,
    about = "Look up orders in the order service and print them as JSON",
    long_about = "order-lookup fetches orders by order_uid from the order service \
                  (GET /api/order/{id}) and prints them as pretty JSON. \
                  Without arguments it reads one order_uid per line from stdin."
)]
pub struct Cli {
    /// Order identifiers (order_uid) to look up
    ///
    /// If none are given, identifiers are read from stdin, one per line
    #[arg(value_name = "ORDER_UID")]
    pub order_uids: Vec<String>,

    /// Base URL of the order service
    #[arg(
        long,
        env = "ORDER_LOOKUP_URL",
        default_value = "http://localhost:8081",
        value_parser = parse_base_url
    )]
    pub base_url: Url,

    /// Language of the messages
    #[arg(long, env = "ORDER_LOOKUP_LANG", value_enum, default_value_t = Locale::Ru)]
    pub lang: Locale,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

// The request path is joined onto the base URL, so it has to be a URL that
// can carry a path (http://..., not mailto:...)
fn parse_base_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| format!("invalid URL '{}': {}", raw, e))?;
    if url.cannot_be_a_base() {
        return Err(format!("'{}' cannot be used as a base URL", raw));
    }
    Ok(url)
}
