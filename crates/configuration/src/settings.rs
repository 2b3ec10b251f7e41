use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
}

/// Connection parameters for the store analytics service.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the analytics API, without a trailing slash.
    pub base_url: String,
    /// The static token sent with every request as the `userAuthToken` header.
    pub auth_token: String,
    /// Per-request timeout in seconds. A retrieval that exceeds it fails the
    /// whole request rather than hang.
    pub timeout_secs: u64,
}
