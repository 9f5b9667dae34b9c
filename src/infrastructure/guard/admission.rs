//! Admission guard: applies the admission filter and carries out bans

use std::sync::Arc;

use tracing::{info, warn};

use super::BanList;
use crate::domain::{AdmissionFilter, AdmissionOutcome, ClientIdentity};

/// Runs the pure [`AdmissionFilter`] and bans identities it flags as bots
#[derive(Debug, Clone)]
pub struct AdmissionGuard {
    filter: AdmissionFilter,
    ban_list: Arc<BanList>,
}

impl AdmissionGuard {
    pub fn new(filter: AdmissionFilter, ban_list: Arc<BanList>) -> Self {
        Self { filter, ban_list }
    }

    /// Evaluate a request's headers. `DenyBot` bans `identity` before returning.
    pub fn evaluate(
        &self,
        referer: &str,
        user_agent: &str,
        identity: ClientIdentity,
    ) -> AdmissionOutcome {
        let outcome = self.filter.evaluate(referer, user_agent);

        match outcome {
            AdmissionOutcome::Allow => {}
            AdmissionOutcome::DenyReferer => {
                info!(identity = %identity, "Referer not allowed");
            }
            AdmissionOutcome::DenyBot => {
                if self.ban_list.ban(identity) {
                    warn!(
                        identity = %identity,
                        user_agent_len = user_agent.chars().count(),
                        "Bot signature detected, identity banned"
                    );
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

    fn guard() -> (AdmissionGuard, Arc<BanList>) {
        let bans = Arc::new(BanList::new());
        (
            AdmissionGuard::new(AdmissionFilter::default(), Arc::clone(&bans)),
            bans,
        )
    }

    fn identity() -> ClientIdentity {
        ClientIdentity::new(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 9)))
    }

    #[test]
    fn test_allow_does_not_ban() {
        let (guard, bans) = guard();

        let outcome = guard.evaluate("https://work.ink/x", BROWSER_UA, identity());

        assert_eq!(outcome, AdmissionOutcome::Allow);
        assert!(bans.is_empty());
    }

    #[test]
    fn test_bad_referer_does_not_ban() {
        let (guard, bans) = guard();

        let outcome = guard.evaluate("", "a", identity());

        assert_eq!(outcome, AdmissionOutcome::DenyReferer);
        assert!(!bans.is_banned(identity()));
    }

    #[test]
    fn test_bot_is_banned() {
        let (guard, bans) = guard();

        let outcome = guard.evaluate("https://work.ink/x", "a", identity());

        assert_eq!(outcome, AdmissionOutcome::DenyBot);
        assert!(bans.is_banned(identity()));
    }
}
