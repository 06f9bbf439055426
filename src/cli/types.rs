//! CLI type definitions
//!
//! This module contains the clap structures that define the CLI interface.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "cloudverify")]
#[command(about = "Check that the Cloudinary credentials are set and working", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Settings file (defaults to ./.cloudverify.yaml when present)
    #[arg(short, long, env = "CLOUDVERIFY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Ping timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Cloudinary API base URL
    #[arg(long)]
    pub api_base_url: Option<String>,
}
