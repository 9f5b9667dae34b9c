//! Application state for shared services

use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::{AdmissionFilter, KeyBroker, PageSource};
use crate::infrastructure::auth::TokenService;
use crate::infrastructure::guard::{AdmissionGuard, BanList, RateLimiter};

/// Application state shared by every request.
///
/// The rate limiter and ban list are the only mutable state; each owns its
/// map and serializes per identity.
#[derive(Clone)]
pub struct AppState {
    pub rate_limiter: Arc<RateLimiter>,
    pub ban_list: Arc<BanList>,
    pub admission: Arc<AdmissionGuard>,
    pub broker: Arc<dyn KeyBroker>,
    pub tokens: Arc<TokenService>,
    pub pages: Arc<dyn PageSource>,
    pub trust_forwarded_for: bool,
}

impl AppState {
    /// Build the state from configuration and the two external collaborators
    pub fn new(
        config: &AppConfig,
        broker: Arc<dyn KeyBroker>,
        pages: Arc<dyn PageSource>,
    ) -> Self {
        let ban_list = Arc::new(BanList::new());
        let admission = AdmissionGuard::new(
            AdmissionFilter::new(config.policy.clone()),
            Arc::clone(&ban_list),
        );

        Self {
            rate_limiter: Arc::new(RateLimiter::new(&config.rate_limit)),
            ban_list,
            admission: Arc::new(admission),
            broker,
            tokens: Arc::new(TokenService::new(&config.token)),
            pages,
            trust_forwarded_for: config.server.trust_forwarded_for,
        }
    }
}
