//! Referral Key Gateway
//!
//! Access-control gateway in front of an upstream key issuer:
//! - Per-client rate limiting and a process-wide ban list
//! - Referer and user-agent admission for the key page
//! - Key checks against the upstream issuer
//! - Short-lived HMAC session tokens

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{broker::HttpKeyBroker, pages::FilePageSource};
use tracing::info;

/// Create the application state with the HTTP broker and file-backed pages
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    anyhow::ensure!(
        config.token.has_secret(),
        "SECRET_KEY not set: a token signing secret is required"
    );

    let broker = HttpKeyBroker::new(config.upstream.clone())?;
    let pages = FilePageSource::new(&config.assets.dir);

    info!(upstream = %config.upstream.url, "Using upstream key issuer");
    info!(dir = %pages.dir().display(), "Serving pages from asset directory");

    Ok(AppState::new(config, Arc::new(broker), Arc::new(pages)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::auth::TokenConfig;

    #[test]
    fn test_state_requires_secret() {
        let result = create_app_state_with_config(&AppConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_state_with_secret() {
        let config = AppConfig {
            token: TokenConfig::new("lib-test-secret"),
            ..AppConfig::default()
        };

        let state = create_app_state_with_config(&config).unwrap();

        assert!(state.tokens.issue().is_ok());
        assert!(state.ban_list.is_empty());
    }
}
