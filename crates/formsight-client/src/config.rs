//! Client configuration.

use std::time::Duration;

/// Configuration for the prediction service client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service. Must end with a trailing slash; the
    /// endpoint paths and the `videos/{filename}` URL are joined by
    /// plain concatenation.
    pub base_url: String,
    /// Request timeout. Uploads include model inference on the server
    /// side, so this is generous by default.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/".to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let mut base_url = std::env::var("FORMSIGHT_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000/".to_string());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            timeout: Duration::from_secs(
                std::env::var("FORMSIGHT_API_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(120),
            ),
        }
    }
}
