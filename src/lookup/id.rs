// src/lookup/id.rs
// =============================================================================
// The order identifier (order_uid) typed in by the user.
//
// Rules:
// - Surrounding whitespace is ignored, using the same whitespace set as
//   JavaScript's String.prototype.trim (a leading BOM counts, U+0085 does not)
// - An empty identifier is rejected before any request is made
// - In a URL path the identifier is escaped exactly like JavaScript's
//   encodeURIComponent, since the service was built for a browser client
// =============================================================================

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;
use std::str::FromStr;

use super::LookupError;

// Characters encodeURIComponent leaves alone besides ASCII letters and digits
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// ECMAScript WhiteSpace and LineTerminator code points
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strips surrounding whitespace the way the browser client did.
pub fn trim_id(raw: &str) -> &str {
    raw.trim_matches(is_js_whitespace)
}

/// A trimmed, non-empty order identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderId(String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier escaped for use as a single URL path segment.
    ///
    /// Example: "abc 123" -> "abc%20123"
    pub fn encoded(&self) -> String {
        utf8_percent_encode(&self.0, URI_COMPONENT).to_string()
    }
}

impl FromStr for OrderId {
    type Err = LookupError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = trim_id(raw);
        if trimmed.is_empty() {
            return Err(LookupError::EmptyId);
        }
        Ok(OrderId(trimmed.to_string()))
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
