//! Request guards: rate limiting, ban list and admission enforcement

mod admission;
mod ban_list;
mod rate_limiter;

pub use admission::AdmissionGuard;
pub use ban_list::BanList;
pub use rate_limiter::{RateLimitResult, RateLimiter};
