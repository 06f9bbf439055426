//! Credential verification service.
//!
//! Runs the two checkpoints in strict order: presence of the required
//! configuration keys, then a single ping to the storage provider. The ping is
//! attempted if and only if every key is present.

use console::Emoji;
use serde::Serialize;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::domain::errors::{PingError, VerifyError};
use crate::domain::models::{
    ConfigurationCheckResult, ConnectivityOutcome, FailureKind, StorageConfig, VerificationOutcome,
};
use crate::domain::ports::{EnvSource, MediaStorageClient, MediaStorageConnector};
use crate::infrastructure::logging::SecretScrubber;

/// Possible explanations printed after any connectivity failure, unconditionally
pub const CANDIDATE_CAUSES: [&str; 3] = [
    "Invalid credentials (check CLOUDINARY_API_KEY and CLOUDINARY_API_SECRET)",
    "Network connectivity issue",
    "Cloudinary account is not active",
];

/// Default upper bound on the ping round-trip
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

static OK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
static FAIL: Emoji<'_, '_> = Emoji("❌ ", "[FAIL] ");

/// Upload folder conventions reported on success
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoragePaths {
    /// Folder for CV/résumé uploads
    pub cv_folder: String,
    /// Folder for profile-picture uploads
    pub profile_picture_folder: String,
}

impl From<&StorageConfig> for StoragePaths {
    fn from(config: &StorageConfig) -> Self {
        Self {
            cv_folder: config.cv_folder.clone(),
            profile_picture_folder: config.profile_picture_folder.clone(),
        }
    }
}

impl Default for StoragePaths {
    fn default() -> Self {
        Self::from(&StorageConfig::default())
    }
}

/// Everything a run produced, for rendering and exit mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Per-key presence check
    pub environment: ConfigurationCheckResult,
    /// Final outcome
    pub outcome: VerificationOutcome,
    /// Upload folders, only reported on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_paths: Option<StoragePaths>,
}

/// Write one line per key: present with its display value, or `NOT SET`.
pub fn report_environment<W: Write>(result: &ConfigurationCheckResult, out: &mut W) -> io::Result<()> {
    for check in result.checks() {
        match check.display.as_deref() {
            Some(display) if check.present => writeln!(out, "{OK}{}: {display}", check.key)?,
            _ => writeln!(out, "{FAIL}{}: NOT SET", check.key)?,
        }
    }
    Ok(())
}

/// Checks that the media-storage credentials are configured and functional
pub struct CredentialVerifier<C, E> {
    connector: C,
    env: E,
    storage_paths: StoragePaths,
    timeout: Duration,
    scrubber: SecretScrubber,
}

impl<C, E> CredentialVerifier<C, E>
where
    C: MediaStorageConnector,
    E: EnvSource,
{
    /// Create a verifier with the default 10s ping timeout
    pub fn new(connector: C, env: E, storage_paths: StoragePaths) -> Self {
        Self {
            connector,
            env,
            storage_paths,
            timeout: DEFAULT_TIMEOUT,
            scrubber: SecretScrubber::new(),
        }
    }

    /// Override the ping timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the three required keys. No side effects beyond reading.
    pub fn check_environment(&self) -> ConfigurationCheckResult {
        let result = ConfigurationCheckResult::from_lookup(|key| self.env.var(key.env_var()));
        debug!(
            complete = result.is_complete(),
            missing = ?result.missing(),
            "environment checked"
        );
        result
    }

    /// Ping the storage provider, exactly once, iff the configuration is complete.
    ///
    /// Returns `ConfigurationIncomplete` without building a client when any
    /// key is absent.
    #[instrument(skip(self, result))]
    pub async fn verify_connectivity(&self, result: &ConfigurationCheckResult) -> ConnectivityOutcome {
        let Some(credentials) = result.credentials() else {
            return Err(VerifyError::ConfigurationIncomplete {
                missing: result.missing(),
            });
        };

        let client = self.connector.connect(credentials)?;

        let outcome = match tokio::time::timeout(self.timeout, client.ping()).await {
            Ok(Ok(status)) => Ok(status),
            Ok(Err(err)) => Err(err),
            Err(_) => Err(PingError::new(
                format!("Request timed out after {}s", self.timeout.as_secs_f64()),
                FailureKind::Network,
            )),
        };

        match outcome {
            Ok(status) => {
                info!(status = %status.status, service = %status.service, "ping succeeded");
                Ok(status)
            }
            Err(err) => {
                warn!(
                    error = %self.scrubber.scrub_message(&err.message),
                    kind = ?err.kind,
                    "ping failed"
                );
                Err(err.into())
            }
        }
    }

    /// Run the whole verification, writing the operator report to `out`.
    ///
    /// The only error is a failure to write the report.
    #[instrument(skip(self, out))]
    pub async fn run<W: Write>(&self, out: &mut W) -> io::Result<VerificationReport> {
        let environment = self.check_environment();
        write_environment_section(&environment, out)?;

        if !environment.is_complete() {
            let report = VerificationReport {
                outcome: VerificationOutcome::ConfigurationIncomplete {
                    missing: environment.missing(),
                },
                environment,
                storage_paths: None,
            };
            write_outcome_section(&report, out)?;
            return Ok(report);
        }

        // Shown before the ping so the operator knows what is being waited on
        writeln!(out, "{TESTING}")?;
        let outcome = VerificationOutcome::from(self.verify_connectivity(&environment).await);
        let storage_paths = outcome.is_success().then(|| self.storage_paths.clone());

        let report = VerificationReport {
            environment,
            outcome,
            storage_paths,
        };
        write_outcome_section(&report, out)?;
        Ok(report)
    }
}

impl VerificationReport {
    /// Write the same operator report [`CredentialVerifier::run`] produces.
    pub fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_environment_section(&self.environment, out)?;
        if !matches!(self.outcome, VerificationOutcome::ConfigurationIncomplete { .. }) {
            writeln!(out, "{TESTING}")?;
        }
        write_outcome_section(self, out)
    }
}

const TESTING: &str = "Testing Cloudinary connection...";

fn write_environment_section<W: Write>(
    environment: &ConfigurationCheckResult,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Checking Cloudinary configuration...")?;
    writeln!(out)?;
    report_environment(environment, out)?;
    writeln!(out)
}

fn write_outcome_section<W: Write>(report: &VerificationReport, out: &mut W) -> io::Result<()> {
    match &report.outcome {
        VerificationOutcome::ConfigurationIncomplete { .. } => writeln!(
            out,
            "{FAIL}Configuration incomplete. Set the missing environment variables and try again."
        )?,
        VerificationOutcome::Success { status, service } => {
            writeln!(out, "{OK}Cloudinary connection successful!")?;
            writeln!(out, "   Status: {status}")?;
            writeln!(out, "   Service: {service}")?;
            if let Some(paths) = &report.storage_paths {
                writeln!(out)?;
                writeln!(out, "Cloudinary is ready. Uploads will be stored in:")?;
                writeln!(out, "   CVs/résumés: {}", paths.cv_folder)?;
                writeln!(out, "   Profile pictures: {}", paths.profile_picture_folder)?;
            }
        }
        VerificationOutcome::ConnectivityFailure { message, .. } => {
            writeln!(out, "{FAIL}Cloudinary connection failed: {message}")?;
            writeln!(out)?;
            writeln!(out, "Possible causes:")?;
            for cause in CANDIDATE_CAUSES {
                writeln!(out, "   - {cause}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{PingStatus, RequiredKey, EXIT_CONFIGURATION_INCOMPLETE};
    use crate::infrastructure::cloudinary::{MockConnector, MockPing};
    use std::collections::HashMap;

    type TestVerifier = CredentialVerifier<MockConnector, HashMap<String, String>>;

    fn present_for(mask: u8) -> Vec<RequiredKey> {
        RequiredKey::ALL
            .into_iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, key)| key)
            .collect()
    }

    fn env_with(keys: &[RequiredKey]) -> HashMap<String, String> {
        keys.iter()
            .map(|key| {
                let value = match key {
                    RequiredKey::CloudName => "demo-cloud",
                    RequiredKey::ApiKey => "123456789012345",
                    RequiredKey::ApiSecret => "abcdefghijklmnopqrstuvwxyz",
                };
                (key.env_var().to_string(), value.to_string())
            })
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        env_with(&RequiredKey::ALL)
    }

    fn verifier(connector: &MockConnector, env: HashMap<String, String>) -> TestVerifier {
        CredentialVerifier::new(connector.clone(), env, StoragePaths::default())
    }

    async fn run_to_string(verifier: &TestVerifier) -> (VerificationReport, String) {
        let mut out = Vec::new();
        let report = verifier.run(&mut out).await.expect("writing to a Vec cannot fail");
        (report, String::from_utf8(out).expect("report is UTF-8"))
    }

    #[test]
    fn test_check_environment_reports_exact_subset() {
        for mask in 0u8..8 {
            let present = present_for(mask);
            let connector = MockConnector::new(MockPing::healthy());
            let result = verifier(&connector, env_with(&present)).check_environment();

            for check in result.checks() {
                assert_eq!(check.present, present.contains(&check.key), "mask {mask}");
            }
        }
    }

    #[test]
    fn test_report_environment_lines() {
        let connector = MockConnector::new(MockPing::healthy());
        let v = verifier(&connector, env_with(&[RequiredKey::CloudName, RequiredKey::ApiSecret]));
        let result = v.check_environment();

        let mut out = Vec::new();
        report_environment(&result, &mut out).expect("write to Vec");
        let text = String::from_utf8(out).expect("UTF-8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("CLOUDINARY_CLOUD_NAME: demo-cloud"));
        assert!(lines[1].ends_with("CLOUDINARY_API_KEY: NOT SET"));
        assert!(lines[2].ends_with("CLOUDINARY_API_SECRET: **********..."));
        assert!(!text.contains("abcdefghijklmnopqrstuvwxyz"));
    }

    #[tokio::test]
    async fn test_incomplete_never_connects() {
        // 0b111 is the only complete subset
        for mask in 0u8..7 {
            let connector = MockConnector::new(MockPing::healthy());
            let v = verifier(&connector, env_with(&present_for(mask)));
            let (report, _) = run_to_string(&v).await;

            assert!(matches!(
                report.outcome,
                VerificationOutcome::ConfigurationIncomplete { .. }
            ));
            assert_eq!(report.outcome.exit_code(), EXIT_CONFIGURATION_INCOMPLETE);
            assert_eq!(connector.connect_count(), 0);
            assert_eq!(connector.ping_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_verify_connectivity_short_circuits_when_incomplete() {
        let connector = MockConnector::new(MockPing::healthy());
        let v = verifier(&connector, env_with(&[RequiredKey::CloudName]));
        let result = v.check_environment();

        let outcome = v.verify_connectivity(&result).await;

        assert_eq!(
            outcome,
            Err(VerifyError::ConfigurationIncomplete {
                missing: vec![RequiredKey::ApiKey, RequiredKey::ApiSecret],
            })
        );
        assert_eq!(connector.connect_count(), 0);
    }

    #[tokio::test]
    async fn test_success_reports_status_service_and_paths() {
        let connector = MockConnector::new(MockPing::healthy());
        let (report, text) = run_to_string(&verifier(&connector, full_env())).await;

        assert_eq!(
            report.outcome,
            VerificationOutcome::Success {
                status: "ok".to_string(),
                service: "cloudinary".to_string(),
            }
        );
        assert_eq!(report.outcome.exit_code(), 0);
        assert_eq!(connector.ping_count(), 1);
        assert!(text.contains("Status: ok"));
        assert!(text.contains("Service: cloudinary"));
        assert!(text.contains("school/cv_uploads"));
        assert!(text.contains("school/profile_pictures"));
        assert_eq!(report.storage_paths, Some(StoragePaths::default()));
    }

    #[tokio::test]
    async fn test_failure_reports_message_and_all_causes() {
        let connector = MockConnector::new(MockPing::failing(
            "Unauthorized",
            FailureKind::Authentication,
        ));
        let (report, text) = run_to_string(&verifier(&connector, full_env())).await;

        assert!(matches!(
            &report.outcome,
            VerificationOutcome::ConnectivityFailure { message, .. } if message == "Unauthorized"
        ));
        assert_ne!(report.outcome.exit_code(), 0);
        assert!(text.contains("Unauthorized"));
        for cause in CANDIDATE_CAUSES {
            assert!(text.contains(cause), "missing cause: {cause}");
        }
        assert!(report.storage_paths.is_none());
        assert_eq!(connector.ping_count(), 1);
    }

    #[tokio::test]
    async fn test_all_causes_listed_regardless_of_kind() {
        let connector = MockConnector::new(MockPing::failing("connection refused", FailureKind::Network));
        let (_, text) = run_to_string(&verifier(&connector, full_env())).await;

        for cause in CANDIDATE_CAUSES {
            assert!(text.contains(cause));
        }
    }

    #[tokio::test]
    async fn test_ping_timeout_is_connectivity_failure() {
        let connector = MockConnector::new(MockPing::Delay(Duration::from_secs(5)));
        let v = verifier(&connector, full_env()).with_timeout(Duration::from_millis(50));

        let (report, text) = run_to_string(&v).await;

        assert!(matches!(
            report.outcome,
            VerificationOutcome::ConnectivityFailure {
                kind: FailureKind::Network,
                ..
            }
        ));
        assert!(text.contains("timed out"));
    }

    #[tokio::test]
    async fn test_runs_are_idempotent() {
        let connector = MockConnector::new(MockPing::failing(
            "Unauthorized",
            FailureKind::Authentication,
        ));
        let v = verifier(&connector, full_env());

        let (first_report, first_text) = run_to_string(&v).await;
        let (second_report, second_text) = run_to_string(&v).await;

        assert_eq!(first_report, second_report);
        assert_eq!(first_text, second_text);
    }

    #[tokio::test]
    async fn test_write_human_matches_run_output() {
        let cases = [
            (MockPing::healthy(), full_env()),
            (MockPing::failing("Unauthorized", FailureKind::Authentication), full_env()),
            (MockPing::healthy(), env_with(&[RequiredKey::ApiKey])),
        ];

        for (ping, env) in cases {
            let connector = MockConnector::new(ping);
            let (report, text) = run_to_string(&verifier(&connector, env)).await;

            let mut rendered = Vec::new();
            report.write_human(&mut rendered).expect("write to Vec");
            assert_eq!(String::from_utf8(rendered).expect("UTF-8"), text);
        }
    }

    #[tokio::test]
    async fn test_custom_ping_status_is_reported() {
        let connector = MockConnector::new(MockPing::Ok(PingStatus {
            status: "degraded".to_string(),
            service: "media".to_string(),
        }));
        let (report, text) = run_to_string(&verifier(&connector, full_env())).await;

        assert!(report.outcome.is_success());
        assert!(text.contains("Status: degraded"));
        assert!(text.contains("Service: media"));
    }
}
