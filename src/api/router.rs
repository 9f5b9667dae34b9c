use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::fallback;
use super::keys;
use super::middleware::{
    admission_middleware, client_guard_middleware, security_headers_middleware,
};
use super::state::AppState;

/// Create the gateway router.
///
/// Every request passes the client guard (rate limit, then ban list);
/// `/get-key` additionally passes admission. Unmatched paths and methods get
/// the not-found page, and handler panics become a generic 500.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/check-key",
            post(keys::check_key).fallback(fallback::not_found),
        )
        .route(
            "/validate-token",
            post(keys::validate_token).fallback(fallback::not_found),
        )
        .route(
            "/get-key",
            get(keys::get_key)
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    admission_middleware,
                ))
                .fallback(fallback::not_found),
        )
        .fallback(fallback::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            client_guard_middleware,
        ))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CatchPanicLayer::custom(fallback::handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
