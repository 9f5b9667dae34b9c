//! Client guard: rate limit and ban list, applied to every request

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{ClientIdentity, DomainError};
use crate::infrastructure::guard::RateLimitResult;

/// Body sent when a client exceeds its request budget
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please try again later.";

/// Resolve the client identity, count the request, and refuse banned clients.
///
/// The rate check runs before the ban check. Admitted requests carry their
/// [`ClientIdentity`] as a request extension.
pub async fn client_guard_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let Some(identity) =
        ClientIdentity::resolve(request.headers(), peer, state.trust_forwarded_for)
    else {
        error!("Unable to determine client address");
        return ApiError::fault().into_response();
    };

    let limit = state.rate_limiter.admit(identity);
    if !limit.allowed {
        warn!(identity = %identity, limit = limit.limit, "Rate limit exceeded");
        return rate_limited_response(&limit);
    }

    if state.ban_list.is_banned(identity) {
        warn!(identity = %identity, "Request from banned identity");
        return ApiError::from(DomainError::access_denied(format!("{} is banned", identity)))
            .into_response();
    }

    request.extensions_mut().insert(identity);
    next.run(request).await
}

fn rate_limited_response(limit: &RateLimitResult) -> Response {
    let mut response = ApiError::rate_limited(RATE_LIMIT_MESSAGE).into_response();
    let headers = response.headers_mut();

    headers.insert(header::RETRY_AFTER, HeaderValue::from(limit.reset_in_seconds));
    headers.insert("x-ratelimit-limit", HeaderValue::from(limit.limit));
    headers.insert("x-ratelimit-remaining", HeaderValue::from(limit.remaining));

    response
}
