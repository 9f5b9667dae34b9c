use serde::Deserialize;

use crate::domain::{AdmissionPolicy, RateLimitConfig};
use crate::infrastructure::auth::{TokenConfig, MAX_TOKEN_TTL_SECS};
use crate::infrastructure::broker::UpstreamConfig;
use crate::infrastructure::logging::LoggingConfig;
use crate::infrastructure::pages::AssetsConfig;

/// Application configuration. Immutable once loaded.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub policy: AdmissionPolicy,
    pub rate_limit: RateLimitConfig,
    pub token: TokenConfig,
    pub upstream: UpstreamConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Take the client identity from `X-Forwarded-For` (only behind a trusted proxy)
    pub trust_forwarded_for: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            trust_forwarded_for: false,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("policy.allowed_referers"),
            )
            .build()?;

        let mut app_config: Self = config.try_deserialize()?;
        app_config.apply_legacy_env(|name| std::env::var(name).ok())?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Honour the bare `SECRET_KEY` and `PORT` variables
    fn apply_legacy_env<F>(&mut self, lookup: F) -> Result<(), config::ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = lookup("SECRET_KEY").filter(|s| !s.is_empty()) {
            self.token.secret = Some(secret);
        }

        if let Some(port) = lookup("PORT").filter(|s| !s.is_empty()) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| config::ConfigError::Message(format!("Invalid PORT: {}", port)))?;
        }

        Ok(())
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.rate_limit.window_secs == 0 {
            return Err(config::ConfigError::Message(
                "rate_limit.window_secs must be greater than zero".to_string(),
            ));
        }

        if self.rate_limit.max_requests == 0 {
            return Err(config::ConfigError::Message(
                "rate_limit.max_requests must be greater than zero".to_string(),
            ));
        }

        if self.token.ttl_secs == 0 || self.token.ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(config::ConfigError::Message(format!(
                "token.ttl_secs must be between 1 and {}",
                MAX_TOKEN_TTL_SECS
            )));
        }

        if self.upstream.url.is_empty() {
            return Err(config::ConfigError::Message(
                "upstream.url must be set".to_string(),
            ));
        }

        Ok(())
    }
}
