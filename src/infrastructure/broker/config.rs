use std::time::Duration;

use serde::Deserialize;

/// Upstream key issuer settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Key generation endpoint
    pub url: String,
    /// Validity requested from the issuer, sent as `expired=<expiry>`
    pub expiry: String,
    /// Bound on a single fetch, in seconds
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs().max(1);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: "https://starxkey-backend.vercel.app/generate".to_string(),
            expiry: "1d".to_string(),
            timeout_secs: 10,
        }
    }
}
