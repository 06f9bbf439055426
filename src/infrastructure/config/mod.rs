//! Configuration management infrastructure
//!
//! Hierarchical settings using figment:
//! - YAML file loading
//! - Environment variable overrides
//! - Settings validation

pub mod loader;

pub use loader::{ConfigError, ConfigLoader, DEFAULT_CONFIG_FILE, ENV_PREFIX};
