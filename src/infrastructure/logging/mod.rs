//! Logging infrastructure
//!
//! Structured diagnostics using tracing and tracing-subscriber, written to
//! stderr so they never mix with the operator report on stdout.

pub mod config;
pub mod logger;
pub mod secret_scrubbing;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::LoggerImpl;
pub use secret_scrubbing::SecretScrubber;
