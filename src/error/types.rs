/**
 * Application Error Types
 *
 * This module defines the error types used across handlers and the
 * persistence layer. Each variant can be converted to an HTTP response.
 *
 * # Error Categories
 *
 * ## Authentication errors
 *
 * `InvalidCredentials` covers every login mismatch: unknown email, wrong
 * password, malformed input. It is deliberately a single variant so the
 * user-visible outcome never reveals which field was wrong.
 *
 * ## Recoverable lookup misses
 *
 * `SessionNotFound` is raised when a session token resolves to nothing.
 * During logout this is recovered locally (already logged out).
 *
 * ## Validation errors
 *
 * `Validation` carries the per-field messages collected while checking
 * registration input. Handlers re-render the form with these messages.
 *
 * ## Infrastructure errors
 *
 * `Database` and `Hash` wrap failures of the storage engine and the
 * bcrypt primitive. They are never swallowed: they log at `error` level
 * and surface to the user as a generic server error.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Application-wide error type.
///
/// Authentication failures and infrastructure failures are distinct
/// variants so that logs can tell them apart even though the user sees
/// a generic message for both the 500-class errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Wrong or unknown email/password combination.
    ///
    /// Generic by design: handlers must not distinguish "no such email"
    /// from "wrong password" anywhere user-visible.
    #[error("incorrect email or password")]
    InvalidCredentials,

    /// A session token did not resolve to a stored session record.
    #[error("session not found")]
    SessionNotFound,

    /// Account field validation failed; one message per failed check.
    #[error("validation failed")]
    Validation(Vec<String>),

    /// Storage engine failure (connection, query, constraint machinery).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// bcrypt hashing or verification failure.
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl AppError {
    /// HTTP status code for this error when it escapes a handler
    /// without special-case rendering.
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidCredentials` - 422 Unprocessable Entity (form re-render)
    /// - `SessionNotFound` - 404 Not Found
    /// - `Validation` - 422 Unprocessable Entity
    /// - `Database` / `Hash` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials => StatusCode::UNPROCESSABLE_ENTITY,
            Self::SessionNotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) | Self::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for infrastructure-level failures that must be logged loudly
    /// and shown to the user only as a generic error page.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Hash(_))
    }
}
