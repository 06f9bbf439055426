//! Cloudverify - media-storage credential verifier
//!
//! Confirms that the Cloudinary credentials the school website relies on are
//! configured and functional: the three required environment values are
//! checked for presence, then, only if all are present, one ping is sent to
//! the Cloudinary API.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): check results, outcomes, and port traits
//! - **Service Layer** (`services`): the verification sequence
//! - **Infrastructure Layer** (`infrastructure`): Cloudinary client, settings, logging
//! - **CLI Layer** (`cli`): argument parsing, JSON output, exit mapping
//!
//! # Example
//!
//! ```no_run
//! use cloudverify::infrastructure::cloudinary::CloudinaryConnector;
//! use cloudverify::infrastructure::credentials::ProcessEnv;
//! use cloudverify::services::{CredentialVerifier, StoragePaths};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let connector = CloudinaryConnector::new("https://api.cloudinary.com", 10);
//!     let verifier = CredentialVerifier::new(connector, ProcessEnv, StoragePaths::default());
//!     let report = verifier.run(&mut std::io::stdout()).await?;
//!     std::process::exit(i32::from(report.outcome.exit_code()));
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{PingError, VerifyError};
pub use domain::models::{
    ConfigurationCheckResult, FailureKind, KeyCheck, PingStatus, RequiredKey, Settings,
    VerificationOutcome,
};
pub use domain::ports::{EnvSource, MediaStorageClient, MediaStorageConnector};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{CredentialVerifier, StoragePaths, VerificationReport};
