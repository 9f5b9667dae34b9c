//! Session token infrastructure
//!
//! This module provides HMAC-signed session tokens for successful key checks.

mod jwt;

pub use jwt::{SessionClaims, TokenConfig, TokenService, MAX_TOKEN_TTL_SECS};
