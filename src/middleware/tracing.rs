// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Builds the per-request span used by the tower-http trace layer

use axum::extract::Request;
use tracing::Span;

/// Create a tracing span for an HTTP request
///
/// `request_id` and `status_code` start empty and are recorded later by
/// the request id middleware and the route handlers.
#[must_use]
pub fn create_request_span(request: &Request) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = tracing::field::Empty,
        status_code = tracing::field::Empty,
    )
}
