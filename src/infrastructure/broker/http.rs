use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error};

use super::UpstreamConfig;
use crate::domain::{AccessCredential, DomainError, KeyBroker};

/// Response body of the key issuer
#[derive(Debug, Deserialize)]
struct IssuedKey {
    key: Option<String>,
}

/// Key broker backed by the upstream HTTP key issuer
#[derive(Debug, Clone)]
pub struct HttpKeyBroker {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl HttpKeyBroker {
    /// Create a broker whose requests are bounded by the configured timeout
    pub fn new(config: UpstreamConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    async fn fetch(&self) -> Result<AccessCredential, DomainError> {
        let response = self
            .client
            .get(&self.config.url)
            .query(&[("expired", self.config.expiry.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::upstream(format!(
                        "Request timed out after {}s",
                        self.config.timeout().as_secs()
                    ))
                } else {
                    DomainError::upstream(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::upstream(format!("HTTP {}", status)));
        }

        let body: IssuedKey = response
            .json()
            .await
            .map_err(|e| DomainError::upstream(format!("Failed to parse response: {}", e)))?;

        match body.key {
            Some(key) if !key.is_empty() => Ok(AccessCredential::new(key)),
            _ => Err(DomainError::upstream("Key not found")),
        }
    }
}

#[async_trait]
impl KeyBroker for HttpKeyBroker {
    async fn fetch_current_key(&self) -> Result<AccessCredential, DomainError> {
        debug!(url = %self.config.url, "Fetching current key");

        self.fetch().await.inspect_err(|e| {
            error!(url = %self.config.url, error = %e, "Error fetching key");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn broker_for(server: &MockServer) -> HttpKeyBroker {
        HttpKeyBroker::new(UpstreamConfig::new(format!("{}/generate", server.uri()))).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_current_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/generate"))
            .and(query_param("expired", "1d"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "key": "KEY-123" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let key = broker_for(&server).await.fetch_current_key().await.unwrap();

        assert!(key.matches("KEY-123"));
    }

    #[tokio::test]
    async fn test_each_call_fetches_again() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/generate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "key": "KEY-123" })),
            )
            .expect(2)
            .mount(&server)
            .await;

        let broker = broker_for(&server).await;
        broker.fetch_current_key().await.unwrap();
        broker.fetch_current_key().await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_key_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "token": "not-a-key" })),
            )
            .mount(&server)
            .await;

        let result = broker_for(&server).await.fetch_current_key().await;

        assert!(matches!(
            result,
            Err(DomainError::UpstreamUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_non_string_key_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "key": 42 })),
            )
            .mount(&server)
            .await;

        let result = broker_for(&server).await.fetch_current_key().await;

        assert!(matches!(
            result,
            Err(DomainError::UpstreamUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_upstream_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let result = broker_for(&server).await.fetch_current_key().await;

        match result {
            Err(DomainError::UpstreamUnavailable { message }) => assert!(message.contains("502")),
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_upstream_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "key": "KEY-123" }))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let config = UpstreamConfig::new(format!("{}/generate", server.uri()))
            .with_timeout(Duration::from_secs(1));
        let broker = HttpKeyBroker::new(config).unwrap();

        let result = broker.fetch_current_key().await;

        assert!(matches!(
            result,
            Err(DomainError::UpstreamUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_upstream() {
        let config = UpstreamConfig::new("http://127.0.0.1:9/generate");
        let broker = HttpKeyBroker::new(config).unwrap();

        let result = broker.fetch_current_key().await;

        assert!(matches!(
            result,
            Err(DomainError::UpstreamUnavailable { .. })
        ));
    }
}
