//! Mock media-storage client for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::PingError;
use crate::domain::models::{Credentials, FailureKind, PingStatus};
use crate::domain::ports::{MediaStorageClient, MediaStorageConnector};

/// Scripted ping behavior
#[derive(Debug, Clone)]
pub enum MockPing {
    /// Succeed with this status
    Ok(PingStatus),
    /// Fail with this error
    Fail(PingError),
    /// Sleep for the duration, then succeed with `{ok, cloudinary}`
    Delay(Duration),
}

impl MockPing {
    /// Success with status `"ok"` and service `"cloudinary"`
    pub fn healthy() -> Self {
        Self::Ok(PingStatus {
            status: "ok".to_string(),
            service: "cloudinary".to_string(),
        })
    }

    /// Failure with the given message
    pub fn failing(message: &str, kind: FailureKind) -> Self {
        Self::Fail(PingError::new(message, kind))
    }
}

/// Mock client returning a scripted response
#[derive(Debug, Clone)]
pub struct MockMediaStorage {
    response: MockPing,
    pings: Arc<AtomicUsize>,
}

#[async_trait]
impl MediaStorageClient for MockMediaStorage {
    async fn ping(&self) -> Result<PingStatus, PingError> {
        self.pings.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            MockPing::Ok(status) => Ok(status.clone()),
            MockPing::Fail(err) => Err(err.clone()),
            MockPing::Delay(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(PingStatus {
                    status: "ok".to_string(),
                    service: "cloudinary".to_string(),
                })
            }
        }
    }
}

/// Mock connector that counts how many clients and pings it produced
#[derive(Debug, Clone)]
pub struct MockConnector {
    response: MockPing,
    connects: Arc<AtomicUsize>,
    pings: Arc<AtomicUsize>,
}

impl MockConnector {
    /// Connector whose clients answer with `response`
    pub fn new(response: MockPing) -> Self {
        Self {
            response,
            connects: Arc::new(AtomicUsize::new(0)),
            pings: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of clients built so far
    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    /// Number of pings issued so far
    pub fn ping_count(&self) -> usize {
        self.pings.load(Ordering::SeqCst)
    }
}

impl MediaStorageConnector for MockConnector {
    type Client = MockMediaStorage;

    fn connect(&self, _credentials: &Credentials) -> Result<Self::Client, PingError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(MockMediaStorage {
            response: self.response.clone(),
            pings: Arc::clone(&self.pings),
        })
    }
}
