use std::fmt;

/// Opaque key value obtained from the upstream authority.
///
/// Never persisted; fetched fresh for every check.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessCredential(String);

impl AccessCredential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a client-submitted key is this credential
    pub fn matches(&self, submitted: &str) -> bool {
        self.0 == submitted
    }
}

impl fmt::Debug for AccessCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessCredential").field(&"[hidden]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_exact_value_only() {
        let credential = AccessCredential::new("KEY-abc123");

        assert!(credential.matches("KEY-abc123"));
        assert!(!credential.matches("KEY-abc12"));
        assert!(!credential.matches("key-abc123"));
        assert!(!credential.matches(""));
    }

    #[test]
    fn test_debug_hides_value() {
        let credential = AccessCredential::new("KEY-abc123");
        let debug = format!("{:?}", credential);

        assert!(!debug.contains("abc123"));
        assert!(debug.contains("[hidden]"));
    }
}
