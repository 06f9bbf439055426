//! Domain errors for the credential verifier.

use thiserror::Error;

use crate::domain::models::{FailureKind, RequiredKey};

/// Join key names as `A, B, C` for error messages.
fn format_keys(keys: &[RequiredKey]) -> String {
    keys.iter()
        .map(|key| key.env_var())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Terminal failures of a verification run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// One or more required values are absent. No network access was attempted.
    #[error("Configuration incomplete, missing: {}", format_keys(.missing))]
    ConfigurationIncomplete { missing: Vec<RequiredKey> },

    /// The ping failed. `message` is the underlying error message, verbatim.
    #[error("{message}")]
    ConnectivityFailure { message: String, kind: FailureKind },
}

/// Failure reported by a [`MediaStorageClient`](crate::domain::ports::MediaStorageClient).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PingError {
    /// Underlying error message as produced by the transport or the provider
    pub message: String,
    /// Advisory classification of the failure
    pub kind: FailureKind,
}

impl PingError {
    /// Create a new ping error
    pub fn new(message: impl Into<String>, kind: FailureKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

impl From<PingError> for VerifyError {
    fn from(err: PingError) -> Self {
        Self::ConnectivityFailure {
            message: err.message,
            kind: err.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_lists_missing_keys() {
        let err = VerifyError::ConfigurationIncomplete {
            missing: vec![RequiredKey::ApiKey, RequiredKey::ApiSecret],
        };
        assert_eq!(
            err.to_string(),
            "Configuration incomplete, missing: CLOUDINARY_API_KEY, CLOUDINARY_API_SECRET"
        );
    }

    #[test]
    fn test_ping_error_message_is_verbatim() {
        let err: VerifyError = PingError::new("Unauthorized", FailureKind::Authentication).into();
        assert_eq!(err.to_string(), "Unauthorized");
        assert!(matches!(
            err,
            VerifyError::ConnectivityFailure {
                kind: FailureKind::Authentication,
                ..
            }
        ));
    }
}
