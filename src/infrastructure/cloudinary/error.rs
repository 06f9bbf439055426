use reqwest::StatusCode;
use thiserror::Error;

use super::types::ErrorEnvelope;
use crate::domain::errors::PingError;
use crate::domain::models::FailureKind;

/// Errors that can occur when pinging the Cloudinary API
///
/// Display strings carry the provider's message verbatim when it sent one,
/// so the operator sees exactly what Cloudinary said.
#[derive(Error, Debug)]
pub enum CloudinaryApiError {
    /// Credentials rejected (401/403)
    #[error("{0}")]
    AuthenticationFailed(String),

    /// Unknown cloud name (404)
    #[error("{0}")]
    NotFound(String),

    /// Rate limit exceeded (420/429)
    #[error("{0}")]
    RateLimitExceeded(String),

    /// API server encountered an internal error (5xx)
    #[error("{0}")]
    ServerError(String),

    /// Request timed out waiting for response
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Network error occurred during request
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// 2xx response whose body could not be understood
    #[error("Invalid ping response: {0}")]
    InvalidResponse(String),

    /// Base URL and cloud name do not form a valid endpoint URL
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// Unknown error occurred
    #[error("{0}")]
    Unknown(String),
}

impl CloudinaryApiError {
    /// Create error from HTTP status code and response body
    ///
    /// Uses `error.message` from the JSON body when present, else the
    /// canonical reason phrase (e.g. `"Unauthorized"`).
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_string)
            });

        match status.as_u16() {
            401 | 403 => Self::AuthenticationFailed(message),
            404 => Self::NotFound(message),
            420 | 429 => Self::RateLimitExceeded(message),
            500..=599 => Self::ServerError(message),
            _ => Self::Unknown(message),
        }
    }

    /// Advisory classification for reporting
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::AuthenticationFailed(_) => FailureKind::Authentication,
            Self::Network(_) | Self::Timeout(_) => FailureKind::Network,
            Self::NotFound(_) | Self::RateLimitExceeded(_) | Self::ServerError(_) => {
                FailureKind::Service
            }
            Self::InvalidUrl(_) | Self::InvalidResponse(_) | Self::Unknown(_) => FailureKind::Unknown,
        }
    }
}

impl From<CloudinaryApiError> for PingError {
    fn from(err: CloudinaryApiError) -> Self {
        Self::new(err.to_string(), err.kind())
    }
}
