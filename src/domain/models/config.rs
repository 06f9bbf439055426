use serde::{Deserialize, Serialize};

use crate::infrastructure::logging::LogConfig;

/// Main settings structure for the verifier
///
/// Credentials are not part of settings. They are read only from the fixed
/// `CLOUDINARY_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Base URL of the media-storage API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Upper bound on the ping round-trip, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Storage folder conventions the website uses
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LogConfig,
}

fn default_api_base_url() -> String {
    "https://api.cloudinary.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            storage: StorageConfig::default(),
            logging: LogConfig::default(),
        }
    }
}

/// Upload folder conventions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StorageConfig {
    /// Folder for CV/résumé uploads
    #[serde(default = "default_cv_folder")]
    pub cv_folder: String,

    /// Folder for profile-picture uploads
    #[serde(default = "default_profile_picture_folder")]
    pub profile_picture_folder: String,
}

fn default_cv_folder() -> String {
    "school/cv_uploads".to_string()
}

fn default_profile_picture_folder() -> String {
    "school/profile_pictures".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cv_folder: default_cv_folder(),
            profile_picture_folder: default_profile_picture_folder(),
        }
    }
}
