//! Outcomes of the connectivity check and of a whole verification run.

use serde::{Deserialize, Serialize};

use super::credentials::RequiredKey;
use crate::domain::errors::VerifyError;

/// Exit status for a fully successful run
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status when required configuration is missing
pub const EXIT_CONFIGURATION_INCOMPLETE: u8 = 1;
/// Exit status when the remote ping failed
pub const EXIT_CONNECTIVITY_FAILURE: u8 = 2;
/// Exit status when the tool itself could not start (bad settings file, logger)
pub const EXIT_SETUP_FAILURE: u8 = 3;

/// Successful ping response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingStatus {
    /// Status reported by the service, `"ok"` when healthy
    pub status: String,
    /// Name of the responding service
    pub service: String,
}

/// Advisory classification of a connectivity failure.
///
/// Never used to pick which candidate causes are shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Credentials rejected
    Authentication,
    /// Transport failure or timeout
    Network,
    /// Service answered with an error unrelated to credentials
    Service,
    /// Anything else
    Unknown,
}

/// Result of the connectivity step
pub type ConnectivityOutcome = Result<PingStatus, VerifyError>;

/// Typed result of a verification run. Mapped to a process exit status only
/// at the entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// All keys present and the ping succeeded
    Success {
        /// Service status
        status: String,
        /// Service name
        service: String,
    },
    /// At least one key absent; no network access attempted
    ConfigurationIncomplete {
        /// Absent keys in report order
        missing: Vec<RequiredKey>,
    },
    /// All keys present but the ping failed
    ConnectivityFailure {
        /// Underlying error message
        message: String,
        /// Advisory classification
        kind: FailureKind,
    },
}

impl VerificationOutcome {
    /// Process exit status for this outcome
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Success { .. } => EXIT_SUCCESS,
            Self::ConfigurationIncomplete { .. } => EXIT_CONFIGURATION_INCOMPLETE,
            Self::ConnectivityFailure { .. } => EXIT_CONNECTIVITY_FAILURE,
        }
    }

    /// True for [`VerificationOutcome::Success`]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<ConnectivityOutcome> for VerificationOutcome {
    fn from(outcome: ConnectivityOutcome) -> Self {
        match outcome {
            Ok(PingStatus { status, service }) => Self::Success { status, service },
            Err(VerifyError::ConfigurationIncomplete { missing }) => {
                Self::ConfigurationIncomplete { missing }
            }
            Err(VerifyError::ConnectivityFailure { message, kind }) => {
                Self::ConnectivityFailure { message, kind }
            }
        }
    }
}
