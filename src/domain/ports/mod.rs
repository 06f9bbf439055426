//! Port trait definitions (Hexagonal Architecture)
//!
//! - MediaStorageClient: the ping capability of the storage provider
//! - MediaStorageConnector: builds a client from resolved credentials
//! - EnvSource: read-only access to configuration values
//!
//! The verifier depends only on these traits, so tests can substitute both
//! the network and the environment.

pub mod env_source;
pub mod media_storage;

pub use env_source::EnvSource;
pub use media_storage::{MediaStorageClient, MediaStorageConnector};
