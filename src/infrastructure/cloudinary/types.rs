use serde::Deserialize;

/// Body of a successful `GET /v1_1/{cloud}/ping`
#[derive(Debug, Clone, Deserialize)]
pub struct PingResponse {
    /// `"ok"` when the account is reachable
    pub status: String,

    /// Some deployments name the responding service; absent on the public API
    #[serde(default)]
    pub service: Option<String>,
}

/// Error envelope Cloudinary returns with non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    /// Error details
    pub error: ErrorBody,
}

/// Inner error object
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message, e.g. `"Invalid api_key 1234"`
    pub message: String,
}
