//! Request and response bodies for the key endpoints

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, SessionToken};

/// POST /check-key
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckKeyRequest {
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckKeyResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl CheckKeyResponse {
    pub fn valid(token: SessionToken) -> Self {
        Self {
            valid: true,
            token: Some(token.into_string()),
        }
    }

    pub fn invalid() -> Self {
        Self {
            valid: false,
            token: None,
        }
    }
}

/// POST /validate-token
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateTokenRequest {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateTokenResponse {
    pub valid: bool,
}

/// Take a required, non-empty string field out of a request body
pub fn require_field(
    value: Option<String>,
    field: &str,
    message: &str,
) -> Result<String, DomainError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DomainError::missing_field(field, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_response_has_no_token() {
        let json = serde_json::to_string(&CheckKeyResponse::invalid()).unwrap();
        assert_eq!(json, r#"{"valid":false}"#);
    }

    #[test]
    fn test_valid_response_carries_token() {
        let json =
            serde_json::to_value(CheckKeyResponse::valid(SessionToken::new("t.o.k"))).unwrap();

        assert_eq!(json["valid"], true);
        assert_eq!(json["token"], "t.o.k");
    }

    #[test]
    fn test_require_field() {
        assert_eq!(
            require_field(Some("abc".into()), "key", "Key is required").unwrap(),
            "abc"
        );
        assert!(matches!(
            require_field(Some(String::new()), "key", "Key is required"),
            Err(DomainError::Validation { .. })
        ));
        assert!(matches!(
            require_field(None, "key", "Key is required"),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let request: CheckKeyRequest = serde_json::from_str("{}").unwrap();
        assert!(request.key.is_none());

        let request: ValidateTokenRequest = serde_json::from_str(r#"{"token":null}"#).unwrap();
        assert!(request.token.is_none());
    }
}
