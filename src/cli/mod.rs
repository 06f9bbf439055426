//! Command-line interface

pub mod commands;
pub mod output;
pub mod types;

pub use types::Cli;

use std::process::ExitCode;

use crate::domain::models::EXIT_SETUP_FAILURE;

/// Report a setup error (the verifier never ran) and return its exit status.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ExitCode {
    if json_mode {
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        let value = serde_json::json!({
            "outcome": "setup_failure",
            "error": err.to_string(),
            "causes": chain,
        });
        match serde_json::to_string_pretty(&value) {
            Ok(rendered) => println!("{rendered}"),
            Err(render_err) => eprintln!("Error: {err:#} (JSON rendering failed: {render_err})"),
        }
    } else {
        eprintln!("Error: {err:#}");
    }
    ExitCode::from(EXIT_SETUP_FAILURE)
}
