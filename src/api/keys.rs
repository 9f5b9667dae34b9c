//! Key check, token validation and key page handlers

use axum::{extract::State, response::Html};
use chrono::Utc;
use tracing::{debug, error, info};

use crate::api::state::AppState;
use crate::api::types::{
    require_field, ApiError, CheckKeyRequest, CheckKeyResponse, Json, ValidateTokenRequest,
    ValidateTokenResponse,
};
use crate::domain::{render_key_page, Page};

/// POST /check-key
pub async fn check_key(
    State(state): State<AppState>,
    Json(request): Json<CheckKeyRequest>,
) -> Result<Json<CheckKeyResponse>, ApiError> {
    let submitted = require_field(request.key, "key", "Key is required")?;

    let current = state.broker.fetch_current_key().await?;

    if !current.matches(&submitted) {
        debug!("Submitted key does not match");
        return Ok(Json(CheckKeyResponse::invalid()));
    }

    let token = state.tokens.issue()?;
    info!("Key accepted, session token issued");

    Ok(Json(CheckKeyResponse::valid(token)))
}

/// POST /validate-token
pub async fn validate_token(
    State(state): State<AppState>,
    Json(request): Json<ValidateTokenRequest>,
) -> Result<Json<ValidateTokenResponse>, ApiError> {
    let token = require_field(request.token, "token", "Token is required")?;

    Ok(Json(ValidateTokenResponse {
        valid: state.tokens.verify(&token),
    }))
}

/// GET /get-key
///
/// Runs behind the admission middleware; only admitted requests reach it.
pub async fn get_key(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let credential = state
        .broker
        .fetch_current_key()
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch key for the key page");
            ApiError::internal("Error generating key")
        })?;
    let issued_at = Utc::now();

    let template = state.pages.load(Page::KeyTemplate).await?;

    Ok(Html(render_key_page(&template, &credential, issued_at)))
}
