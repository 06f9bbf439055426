//! Cloudverify CLI entry point.

use clap::Parser;
use std::process::ExitCode;

use cloudverify::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json_mode = cli.json;

    match cloudverify::cli::commands::verify::execute(cli).await {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => cloudverify::cli::handle_error(&err, json_mode),
    }
}
