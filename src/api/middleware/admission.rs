//! Referer/user-agent admission for the key page

use std::borrow::Cow;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::api::fallback::load_page;
use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{AdmissionOutcome, ClientIdentity, Page};

/// Body sent to clients flagged as bots
pub const BOT_DETECTED_MESSAGE: &str = "Suspicious activity detected";

/// Run the admission guard. Expects the client guard to have run first.
pub async fn admission_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(identity) = request.extensions().get::<ClientIdentity>().copied() else {
        error!("Admission check reached without a client identity");
        return ApiError::fault().into_response();
    };

    let outcome = {
        let headers = request.headers();
        state.admission.evaluate(
            &header_str(headers, header::REFERER),
            &header_str(headers, header::USER_AGENT),
            identity,
        )
    };

    match outcome {
        AdmissionOutcome::Allow => next.run(request).await,
        AdmissionOutcome::DenyReferer => (
            StatusCode::FORBIDDEN,
            Html(load_page(state.pages.as_ref(), Page::AccessDenied).await),
        )
            .into_response(),
        AdmissionOutcome::DenyBot => ApiError::forbidden(BOT_DETECTED_MESSAGE).into_response(),
    }
}

/// Header value as text. Absent values read as empty; invalid UTF-8 is
/// replaced rather than discarded.
fn header_str(headers: &HeaderMap, name: header::HeaderName) -> Cow<'_, str> {
    headers
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()))
        .unwrap_or(Cow::Borrowed(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_header_str() {
        let mut headers = HeaderMap::new();
        headers.insert(header::REFERER, HeaderValue::from_static("https://work.ink/x"));
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_bytes("Mozilla/5.0 Übersetzer/1.0".as_bytes()).unwrap(),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_bytes(b"\xffbinary").unwrap());

        assert_eq!(header_str(&headers, header::REFERER), "https://work.ink/x");
        assert_eq!(
            header_str(&headers, header::USER_AGENT),
            "Mozilla/5.0 Übersetzer/1.0"
        );
        assert_eq!(header_str(&headers, header::ACCEPT), "\u{FFFD}binary");
        assert_eq!(header_str(&headers, header::ACCEPT_LANGUAGE), "");
    }
}
