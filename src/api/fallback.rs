//! Not-found page and the top-level fault handler

use std::any::Any;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{Page, PageSource};

/// Load a static page, falling back to the built-in version if it is unreadable
pub async fn load_page(pages: &dyn PageSource, page: Page) -> String {
    match pages.load(page).await {
        Ok(html) => html,
        Err(e) => {
            warn!(page = page.file_name(), error = %e, "Serving built-in page");
            page.fallback().unwrap_or_default().to_string()
        }
    }
}

/// Any unmatched route or method
pub async fn not_found(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(load_page(state.pages.as_ref(), Page::NotFound).await),
    )
}

/// Convert a handler panic into the generic 500 body
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    error!(panic = %detail, "Unhandled fault in request handler");

    ApiError::fault().into_response()
}
