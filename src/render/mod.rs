// src/render/mod.rs
// =============================================================================
// Turns the outcome of a lookup into the text shown to the user.
//
// This is a pure function: no I/O, same input always gives the same text.
//
// Outcomes:
// - Ok(order)            -> the order as pretty-printed JSON (2-space indent)
// - Err(EmptyId)         -> "enter an order_uid" prompt
// - Err(Status(code))    -> error message with the numeric status code
// - Err(Transport | Url) -> fixed "service unreachable" message
// =============================================================================

mod messages;

pub use messages::Locale;

use serde_json::Value;

use crate::lookup::LookupError;

pub fn render(outcome: &Result<Value, LookupError>, locale: Locale) -> String {
    match outcome {
        // Serializing a Value cannot fail, the fallback is the compact form
        Ok(order) => serde_json::to_string_pretty(order).unwrap_or_else(|_| order.to_string()),
        Err(LookupError::EmptyId) => locale.enter_id_prompt().to_string(),
        Err(LookupError::Status(status)) => locale.http_error(status.as_u16()),
        Err(LookupError::Transport(_)) | Err(LookupError::InvalidUrl(_)) => {
            locale.unreachable().to_string()
        }
    }
}
