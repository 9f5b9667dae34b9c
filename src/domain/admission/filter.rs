use super::AdmissionPolicy;

/// Result of evaluating a request's referer and user-agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionOutcome {
    Allow,
    /// Referer missing or not from an approved source. Not punitive.
    DenyReferer,
    /// Bot signature. The caller bans the identity.
    DenyBot,
}

impl AdmissionOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Pure referer/user-agent decision. Holds no state and mutates nothing.
#[derive(Debug, Clone, Default)]
pub struct AdmissionFilter {
    policy: AdmissionPolicy,
}

impl AdmissionFilter {
    pub fn new(policy: AdmissionPolicy) -> Self {
        Self { policy }
    }

    /// Referer is checked first so that direct visits are denied without a ban.
    pub fn evaluate(&self, referer: &str, user_agent: &str) -> AdmissionOutcome {
        if !self.policy.referer_allowed(referer) {
            return AdmissionOutcome::DenyReferer;
        }

        if !self.policy.user_agent_acceptable(user_agent) {
            return AdmissionOutcome::DenyBot;
        }

        AdmissionOutcome::Allow
    }
}
