//! Application configuration

mod app_config;

pub use app_config::{AppConfig, ServerConfig};
pub use crate::infrastructure::logging::{LogFormat, LoggingConfig};
