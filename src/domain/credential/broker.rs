use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::AccessCredential;
use crate::domain::DomainError;

/// Source of the currently valid access credential.
///
/// Implementations make a single attempt per call and fail with
/// `DomainError::UpstreamUnavailable` on any error, timeout or malformed
/// response. Retry policy belongs to the caller.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait KeyBroker: Send + Sync {
    /// Fetch the key the upstream authority currently considers valid
    async fn fetch_current_key(&self) -> Result<AccessCredential, DomainError>;
}
