//! API middleware components

pub mod admission;
pub mod guard;
pub mod security;

pub use admission::{admission_middleware, BOT_DETECTED_MESSAGE};
pub use guard::{client_guard_middleware, RATE_LIMIT_MESSAGE};
pub use security::security_headers_middleware;
