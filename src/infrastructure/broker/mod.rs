//! Upstream key issuer client

mod config;
mod http;

pub use config::UpstreamConfig;
pub use http::HttpKeyBroker;
