use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static CLOUDINARY_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"cloudinary://([^:\s]+):([^@\s]+)@").expect("valid cloudinary url pattern")
});

static BASIC_AUTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Basic\s+[A-Za-z0-9+/=]+").expect("valid basic auth pattern"));

static SECRET_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)["']?(api_secret|cloudinary_api_secret|secret)["']?\s*([:=])\s*["']?[^"'\s,}&]+["']?"#)
        .expect("valid secret field pattern")
});

/// Scrubs storage credentials out of diagnostic strings before they are logged
#[derive(Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    /// Create a new scrubber
    pub const fn new() -> Self {
        Self
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = CLOUDINARY_URL.replace_all(message, "cloudinary://$1:[REDACTED]@");
        let scrubbed = BASIC_AUTH.replace_all(&scrubbed, "Basic [REDACTED]");
        SECRET_FIELD
            .replace_all(&scrubbed, "$1$2[REDACTED]")
            .into_owned()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
