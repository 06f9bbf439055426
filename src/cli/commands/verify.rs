//! Implementation of the `cloudverify` command.

use anyhow::{Context, Result};
use std::io;
use std::time::Duration;
use tracing::debug;

use crate::cli::output::{output, CommandOutput};
use crate::cli::Cli;
use crate::domain::models::{Settings, VerificationOutcome};
use crate::infrastructure::cloudinary::CloudinaryConnector;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::credentials::ProcessEnv;
use crate::infrastructure::logging::LoggerImpl;
use crate::services::{CredentialVerifier, StoragePaths, VerificationReport};

impl CommandOutput for VerificationReport {
    fn to_human(&self) -> String {
        let mut rendered = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_human(&mut rendered);
        String::from_utf8_lossy(&rendered).trim_end().to_string()
    }
}

/// Resolve settings: file and environment first, then command-line flags.
pub fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = ConfigLoader::load(cli.config.as_deref())?;

    if let Some(timeout_secs) = cli.timeout_secs {
        settings.timeout_secs = timeout_secs;
    }
    if let Some(ref api_base_url) = cli.api_base_url {
        settings.api_base_url.clone_from(api_base_url);
    }

    ConfigLoader::validate(&settings).context("Invalid command-line override")?;
    Ok(settings)
}

/// Load settings, set up logging, and run the verifier against the real
/// process environment and Cloudinary API.
pub async fn execute(cli: Cli) -> Result<VerificationOutcome> {
    let settings = resolve_settings(&cli)?;
    let _logger = LoggerImpl::init(&settings.logging)?;
    debug!(
        api_base_url = %settings.api_base_url,
        timeout_secs = settings.timeout_secs,
        "settings resolved"
    );

    let connector = CloudinaryConnector::new(settings.api_base_url.clone(), settings.timeout_secs);
    let verifier = CredentialVerifier::new(connector, ProcessEnv, StoragePaths::from(&settings.storage))
        .with_timeout(Duration::from_secs(settings.timeout_secs));

    let report = verifier
        .run(&mut io::sink())
        .await
        .context("Failed to build verification report")?;
    output(&report, cli.json)?;

    Ok(report.outcome)
}
