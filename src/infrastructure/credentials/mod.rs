//! Credentials management infrastructure
//!
//! Reads the storage credentials from the process environment.

use crate::domain::ports::EnvSource;

/// [`EnvSource`] backed by the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // Non-Unicode values count as unset
        std::env::var(name).ok()
    }
}
