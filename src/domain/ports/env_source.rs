use std::collections::HashMap;

/// Read-only source of named configuration values.
pub trait EnvSource {
    /// Value for `name`, `None` if unset or unreadable
    fn var(&self, name: &str) -> Option<String>;
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}
