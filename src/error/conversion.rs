/**
 * Error Conversion
 *
 * Converts `AppError` into HTTP responses. The application is
 * server-rendered, so errors surface as small HTML pages rather than
 * JSON bodies.
 *
 * Infrastructure errors are logged at `error` level before being
 * flattened to a generic page; authentication and validation errors
 * log at `warn` at most and carry their own messages.
 */

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::types::AppError;
use crate::views;

impl IntoResponse for AppError {
    /// Convert an application error into an HTTP response.
    ///
    /// Fatal errors (database, hashing) are rendered as a generic
    /// server error page; their detail goes to the log only. Everything
    /// else renders with its own status code and a short message.
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = if self.is_fatal() {
            tracing::error!("infrastructure error: {self}");
            views::error_page("Something went wrong. Please try again later.")
        } else {
            tracing::warn!("request failed: {self}");
            views::error_page(&self.to_string())
        };

        Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
            .body(Body::from(body))
            .unwrap_or_else(|_| {
                // Response::builder only fails on invalid parts, which are
                // all constants here, but never panic in the error path.
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            })
    }
}
