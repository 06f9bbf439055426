//! Cloudinary adapter for the media-storage ports

pub mod client;
pub mod error;
pub mod mock_client;
pub mod types;

pub use client::{CloudinaryClientConfig, CloudinaryClientImpl, CloudinaryConnector};
pub use error::CloudinaryApiError;
pub use mock_client::{MockConnector, MockMediaStorage, MockPing};
