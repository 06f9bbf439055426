//! Output formatting utilities for the CLI.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};

/// A command result that can be rendered for humans or as JSON
pub trait CommandOutput: Serialize {
    /// Human-readable rendering
    fn to_human(&self) -> String;

    /// Machine-readable rendering
    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Render `result` to `out` in the selected mode.
///
/// Nothing is written if the JSON rendering fails.
pub fn output_to<T: CommandOutput, W: Write>(result: &T, json_mode: bool, out: &mut W) -> Result<()> {
    let rendered = if json_mode {
        let value = result.to_json().context("Failed to render JSON output")?;
        serde_json::to_string_pretty(&value).context("Failed to render JSON output")?
    } else {
        result.to_human()
    };
    writeln!(out, "{rendered}").context("Failed to write output")
}

/// Render `result` to stdout in the selected mode
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) -> Result<()> {
    output_to(result, json_mode, &mut io::stdout())
}
