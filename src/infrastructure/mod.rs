//! Infrastructure layer module
//!
//! This module contains the adapters behind the domain ports:
//! - Cloudinary HTTP client
//! - Configuration management
//! - Logging infrastructure
//! - Credentials (process environment) access

pub mod cloudinary;
pub mod config;
pub mod credentials;
pub mod logging;
