//! Required storage credentials and the presence check over them.

use serde::Serialize;
use std::fmt;

/// Maximum number of mask characters shown for a secret
pub const MASK_CAP: usize = 10;

/// Marker appended to every masked value
pub const ELLIPSIS: &str = "...";

/// The three configuration values the media-storage integration needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RequiredKey {
    /// Cloud (account) identifier
    #[serde(rename = "CLOUDINARY_CLOUD_NAME")]
    CloudName,
    /// Access key identifier
    #[serde(rename = "CLOUDINARY_API_KEY")]
    ApiKey,
    /// Access key secret
    #[serde(rename = "CLOUDINARY_API_SECRET")]
    ApiSecret,
}

impl RequiredKey {
    /// All required keys, in report order
    pub const ALL: [Self; 3] = [Self::CloudName, Self::ApiKey, Self::ApiSecret];

    /// Environment variable the value is read from
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::CloudName => "CLOUDINARY_CLOUD_NAME",
            Self::ApiKey => "CLOUDINARY_API_KEY",
            Self::ApiSecret => "CLOUDINARY_API_SECRET",
        }
    }

    /// Whether the value must be masked before display
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::ApiSecret)
    }
}

impl fmt::Display for RequiredKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_var())
    }
}

/// Mask a secret for display.
///
/// Produces one `*` per character up to [`MASK_CAP`], followed by [`ELLIPSIS`].
/// None of the secret's characters appear in the result.
pub fn mask_secret(value: &str) -> String {
    let visible = value.chars().count().min(MASK_CAP);
    format!("{}{ELLIPSIS}", "*".repeat(visible))
}

/// Presence check for a single key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyCheck {
    /// Which key was checked
    pub key: RequiredKey,
    /// True if the value is set and non-empty
    pub present: bool,
    /// Display-safe value; masked for secrets, `None` when absent
    pub display: Option<String>,
}

impl KeyCheck {
    /// Build a check from the raw value. Empty strings count as absent.
    pub fn from_value(key: RequiredKey, value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => Self {
                key,
                present: true,
                display: Some(if key.is_secret() {
                    mask_secret(v)
                } else {
                    v.to_string()
                }),
            },
            None => Self {
                key,
                present: false,
                display: None,
            },
        }
    }
}

/// Resolved credentials, available only when every key is present.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Cloud (account) identifier
    pub cloud_name: String,
    /// Access key identifier
    pub api_key: String,
    /// Access key secret
    pub api_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &mask_secret(&self.api_secret))
            .finish()
    }
}

/// Result of reading the required keys from configuration.
///
/// Holds one [`KeyCheck`] per [`RequiredKey`] in [`RequiredKey::ALL`] order.
/// Raw secrets are kept only inside [`Credentials`], which exists iff all
/// keys are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationCheckResult {
    checks: Vec<KeyCheck>,
    #[serde(skip)]
    credentials: Option<Credentials>,
}

impl ConfigurationCheckResult {
    /// Run the presence check using `lookup` to fetch each key's raw value.
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(RequiredKey) -> Option<String>,
    {
        let values: Vec<(RequiredKey, Option<String>)> = RequiredKey::ALL
            .into_iter()
            .map(|key| (key, lookup(key).filter(|v| !v.is_empty())))
            .collect();

        let checks = values
            .iter()
            .map(|(key, value)| KeyCheck::from_value(*key, value.as_deref()))
            .collect();

        let mut values = values.into_iter().map(|(_, value)| value);
        let credentials = match (values.next(), values.next(), values.next()) {
            (Some(Some(cloud_name)), Some(Some(api_key)), Some(Some(api_secret))) => {
                Some(Credentials {
                    cloud_name,
                    api_key,
                    api_secret,
                })
            }
            _ => None,
        };

        Self {
            checks,
            credentials,
        }
    }

    /// Per-key checks in report order
    pub fn checks(&self) -> &[KeyCheck] {
        &self.checks
    }

    /// Check for one key
    pub fn check(&self, key: RequiredKey) -> Option<&KeyCheck> {
        self.checks.iter().find(|c| c.key == key)
    }

    /// True iff every required key is present
    pub fn is_complete(&self) -> bool {
        self.credentials.is_some()
    }

    /// Keys that were absent, in report order
    pub fn missing(&self) -> Vec<RequiredKey> {
        self.checks
            .iter()
            .filter(|c| !c.present)
            .map(|c| c.key)
            .collect()
    }

    /// Resolved credentials, `None` unless complete
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}
