//! Domain models

pub mod config;
pub mod credentials;
pub mod outcome;

pub use config::{Settings, StorageConfig};
pub use credentials::{
    mask_secret, ConfigurationCheckResult, Credentials, KeyCheck, RequiredKey, ELLIPSIS, MASK_CAP,
};
pub use outcome::{
    ConnectivityOutcome, FailureKind, PingStatus, VerificationOutcome, EXIT_CONFIGURATION_INCOMPLETE,
    EXIT_CONNECTIVITY_FAILURE, EXIT_SETUP_FAILURE, EXIT_SUCCESS,
};
