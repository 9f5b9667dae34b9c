use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Access denied: {reason}")]
    AccessDenied { reason: String },

    #[error("Upstream unavailable: {message}")]
    UpstreamUnavailable { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Validation failure for a required request field that was absent or empty
    pub fn missing_field(field: &str, message: impl Into<String>) -> Self {
        Self::validation(field, message)
    }

    pub fn access_denied(reason: impl Into<String>) -> Self {
        Self::AccessDenied {
            reason: reason.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error is a server-side fault rather than a client mistake
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            Self::UpstreamUnavailable { .. } | Self::Configuration { .. } | Self::Internal { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = DomainError::missing_field("key", "Key is required");
        assert_eq!(error.to_string(), "Validation error: Key is required");
        assert!(!error.is_fault());
    }

    #[test]
    fn test_upstream_error() {
        let error = DomainError::upstream("connection refused");
        assert_eq!(error.to_string(), "Upstream unavailable: connection refused");
        assert!(error.is_fault());
    }

    #[test]
    fn test_configuration_error_is_fault() {
        let error = DomainError::configuration("SECRET_KEY not set");
        assert!(error.is_fault());
    }

    #[test]
    fn test_access_denied_is_not_fault() {
        let error = DomainError::access_denied("banned");
        assert_eq!(error.to_string(), "Access denied: banned");
        assert!(!error.is_fault());
    }
}
