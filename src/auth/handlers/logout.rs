/**
 * Logout Handler
 *
 * `DELETE /logout` ends the current session:
 *
 * 1. Read the token from the `app_session` cookie
 * 2. Delete the matching session record, if any
 * 3. Clear the cookie and set the `sessions.destroy.success` flash
 * 4. Redirect to the landing page
 *
 * Anonymous callers and stale cookies are a no-op: the redirect still
 * happens and nothing errors. Already-logged-out is not a failure.
 */

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};

use crate::auth::cookie::read_session_token;
use crate::auth::sessions::delete_session_by_token;
use crate::error::AppError;
use crate::server::state::AppState;

/// `DELETE /logout` - delete the session record and clear the cookie.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if let Some(token) = read_session_token(&headers) {
        let deleted = delete_session_by_token(&state.pool, &token).await?;
        if deleted {
            tracing::info!("logged out");
        } else {
            tracing::debug!("logout with unknown session token, nothing to delete");
        }
    }

    let set_cookies = AppendHeaders([
        (SET_COOKIE, state.cookies.clear_session()),
        (SET_COOKIE, state.cookies.set_flash("sessions.destroy.success")),
    ]);
    Ok((set_cookies, Redirect::to("/")).into_response())
}
