//! JWT session token generation and validation

use std::fmt::Debug;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{DomainError, SessionToken};

/// Longest accepted token lifetime (one day)
pub const MAX_TOKEN_TTL_SECS: u64 = 86_400;

/// JWT claims structure. No subject: a token only proves a check happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl SessionClaims {
    /// Create new claims issued at `issued_at`. The lifetime is capped at
    /// [`MAX_TOKEN_TTL_SECS`].
    pub fn new(issued_at: DateTime<Utc>, ttl_secs: u64) -> Self {
        let ttl = ttl_secs.min(MAX_TOKEN_TTL_SECS) as i64;
        let exp = issued_at + Duration::seconds(ttl);

        Self {
            iat: issued_at.timestamp(),
            exp: exp.timestamp(),
        }
    }
}

/// Configuration for the token service
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Signing secret. Tokens cannot be issued without it.
    pub secret: Option<String>,
    /// Token lifetime in seconds
    pub ttl_secs: u64,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
            ..Self::default()
        }
    }

    pub fn has_secret(&self) -> bool {
        self.secret.as_deref().is_some_and(|s| !s.is_empty())
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: None,
            ttl_secs: 30,
        }
    }
}

impl Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &self.secret.as_ref().map(|_| "[hidden]"))
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

struct SigningKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

/// Issues and verifies HS256 session tokens with the process-wide secret
pub struct TokenService {
    keys: Option<SigningKeys>,
    ttl_secs: u64,
    validation: Validation,
}

impl Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("keys", &self.keys.as_ref().map(|_| "[hidden]"))
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

impl TokenService {
    /// Create a new token service with the given configuration
    pub fn new(config: &TokenConfig) -> Self {
        let keys = config
            .secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|secret| SigningKeys {
                encoding_key: EncodingKey::from_secret(secret.as_bytes()),
                decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            });

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            keys,
            ttl_secs: config.ttl_secs.min(MAX_TOKEN_TTL_SECS),
            validation,
        }
    }

    /// Issue a token valid from now for the configured lifetime
    pub fn issue(&self) -> Result<SessionToken, DomainError> {
        self.issue_at(Utc::now())
    }

    pub(crate) fn issue_at(&self, issued_at: DateTime<Utc>) -> Result<SessionToken, DomainError> {
        let keys = self
            .keys
            .as_ref()
            .ok_or_else(|| DomainError::configuration("SECRET_KEY not set"))?;

        let claims = SessionClaims::new(issued_at, self.ttl_secs);

        encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding_key)
            .map(SessionToken::new)
            .map_err(|e| DomainError::internal(format!("Failed to generate JWT: {}", e)))
    }

    /// Verify a token. Malformed, expired or foreign tokens are simply invalid.
    pub fn verify(&self, token: &str) -> bool {
        let Some(keys) = self.keys.as_ref() else {
            warn!("Token verification attempted without a signing secret");
            return false;
        };

        match decode::<SessionClaims>(token, &keys.decoding_key, &self.validation) {
            Ok(_) => true,
            Err(e) => {
                debug!(reason = %e, "Token rejected");
                false
            }
        }
    }
}
