// src/output.rs
// =============================================================================
// The terminal as an output area.
//
// - Final text (order JSON or error message) goes to stdout
// - Transient text (the loading indicator) goes to stderr, so piping stdout
//   into a file or `jq` only ever sees the final result
//
// Each write holds the stdout/stderr lock for the whole block, so
// concurrent lookups never interleave their lines.
// =============================================================================

use std::io::{self, Write};
use tracing::warn;

use crate::action::OutputArea;

#[derive(Debug, Default)]
pub struct TerminalOutput {
    // Printed above the final text when several ids are looked up at once
    label: Option<String>,
}

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput::default()
    }

    pub fn labelled(label: &str) -> Self {
        TerminalOutput {
            label: Some(label.to_string()),
        }
    }

    fn format_block(&self, text: &str) -> String {
        match &self.label {
            Some(label) => format!("# {}\n{}\n", label, text),
            None => format!("{}\n", text),
        }
    }
}

impl OutputArea for TerminalOutput {
    fn set_text(&self, text: &str) {
        let block = self.format_block(text);
        let mut stdout = io::stdout().lock();
        if let Err(e) = stdout.write_all(block.as_bytes()).and_then(|_| stdout.flush()) {
            warn!(error = %e, "failed to write to stdout");
        }
    }

    fn set_pending(&self, text: &str) {
        let line = match &self.label {
            Some(label) => format!("{}: {}\n", label, text),
            None => format!("{}\n", text),
        };
        if let Err(e) = io::stderr().lock().write_all(line.as_bytes()) {
            warn!(error = %e, "failed to write to stderr");
        }
    }
}
