use serde::Deserialize;

/// Referral sources that are trusted by default
pub const DEFAULT_ALLOWED_REFERERS: [&str; 4] = [
    "linkvertise.com",
    "work.ink",
    "loot-link.com",
    "direct-link.net",
];

/// Shortest user-agent accepted before a client is treated as a bot
pub const DEFAULT_MIN_USER_AGENT_LENGTH: usize = 10;

/// Static admission policy, fixed at startup
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdmissionPolicy {
    /// A referer is accepted if it contains any of these substrings
    pub allowed_referers: Vec<String>,
    /// User-agents shorter than this (in characters) are treated as bots
    pub min_user_agent_length: usize,
}

impl AdmissionPolicy {
    pub fn new(allowed_referers: Vec<String>, min_user_agent_length: usize) -> Self {
        Self {
            allowed_referers,
            min_user_agent_length,
        }
    }

    pub fn referer_allowed(&self, referer: &str) -> bool {
        !referer.is_empty()
            && self
                .allowed_referers
                .iter()
                .filter(|allowed| !allowed.is_empty())
                .any(|allowed| referer.contains(allowed.as_str()))
    }

    pub fn user_agent_acceptable(&self, user_agent: &str) -> bool {
        !user_agent.is_empty() && user_agent.chars().count() >= self.min_user_agent_length
    }
}

impl Default for AdmissionPolicy {
    fn default() -> Self {
        Self {
            allowed_referers: DEFAULT_ALLOWED_REFERERS
                .iter()
                .map(|r| r.to_string())
                .collect(),
            min_user_agent_length: DEFAULT_MIN_USER_AGENT_LENGTH,
        }
    }
}
