// src/action.rs
// =============================================================================
// The order lookup action: read the identifier, request the order, show the
// result.
//
// Steps:
// 1. Trim the identifier. If empty, show the prompt and stop (no request)
// 2. Show the loading indicator
// 3. GET /api/order/{id} and wait for the response
// 4. Replace the output with the order JSON or an error message
//
// Each call is independent: it owns its identifier and response, and only
// touches the output area it was given. Two calls racing on the same output
// area simply leave whichever finished last on screen.
// =============================================================================

use serde_json::Value;

use crate::lookup::{LookupError, OrderClient, OrderId};
use crate::render::{render, Locale};

/// Where the action shows its text (a terminal, a test recorder, ...).
///
/// Implementations must be shareable between tasks, lookups can run
/// concurrently against the same output.
pub trait OutputArea: Send + Sync {
    /// Replace the output with final text
    fn set_text(&self, text: &str);

    /// Show a transient state, such as the loading indicator
    fn set_pending(&self, text: &str) {
        self.set_text(text);
    }
}

// Runs one lookup and renders its outcome into `out`
//
// The outcome is also returned, so the caller can derive an exit code from
// it. Rendering has already happened by then.
pub async fn lookup_and_render<O>(
    client: &OrderClient,
    raw_id: &str,
    locale: Locale,
    out: &O,
) -> Result<Value, LookupError>
where
    O: OutputArea + ?Sized,
{
    let outcome = match raw_id.parse::<OrderId>() {
        Ok(id) => {
            out.set_pending(locale.loading());
            client.fetch(&id).await
        }
        Err(e) => Err(e),
    };

    out.set_text(&render(&outcome, locale));
    outcome
}
