use std::time::Duration;

use serde::Deserialize;

/// Per-identity request budget over a fixed window
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Window length in seconds
    pub window_secs: u64,
    /// Requests admitted per identity per window
    pub max_requests: u32,
    /// How often elapsed windows are evicted, in seconds
    pub cleanup_interval_secs: u64,
}

impl RateLimitConfig {
    pub fn new(window_secs: u64, max_requests: u32) -> Self {
        Self {
            window_secs,
            max_requests,
            ..Self::default()
        }
    }

    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs.max(1))
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: 300, // 5 minutes
            max_requests: 100,
            cleanup_interval_secs: 60,
        }
    }
}
