use async_trait::async_trait;

use crate::domain::errors::PingError;
use crate::domain::models::{Credentials, PingStatus};

/// Narrow view of the media-storage provider: one reachability check.
#[async_trait]
pub trait MediaStorageClient: Send + Sync {
    /// Issue exactly one ping request.
    async fn ping(&self) -> Result<PingStatus, PingError>;
}

/// Factory for [`MediaStorageClient`]s.
///
/// The verifier only calls this once every required key is present.
pub trait MediaStorageConnector: Send + Sync {
    /// Client type produced by this connector
    type Client: MediaStorageClient;

    /// Initialize a client with the three credential values.
    fn connect(&self, credentials: &Credentials) -> Result<Self::Client, PingError>;
}
