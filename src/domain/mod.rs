//! Domain layer for the credential verifier
//!
//! This module contains the verifier's core types and the port traits that
//! infrastructure adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{PingError, VerifyError};
