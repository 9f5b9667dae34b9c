//! Admission policy: referer/user-agent rules and request budgets

mod filter;
mod policy;
mod rate_limit;

pub use filter::{AdmissionFilter, AdmissionOutcome};
pub use policy::AdmissionPolicy;
pub use rate_limit::RateLimitConfig;
