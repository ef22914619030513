/**
 * Login Handlers
 *
 * `GET /login` renders the login form; `POST /login` processes an
 * attempt.
 *
 * # Login Process
 *
 * 1. Extract `user[email]` / `user[password]` from the form body
 * 2. Verify the credentials
 * 3. On failure: re-render the form with the localized
 *    `sessions.create.incorrect_details` notification, HTTP 422, no
 *    session record created, no redirect
 * 4. On success: create a session record, issue the `app_session`
 *    cookie, redirect to the landing page
 *
 * # Security
 *
 * - The failure path is identical for unknown email and wrong password
 * - Infrastructure failures propagate as `AppError` (generic 500);
 *   they are never folded into the credentials message
 */

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::auth::credentials::verify;
use crate::auth::handlers::types::LoginForm;
use crate::auth::sessions::create_session;
use crate::error::AppError;
use crate::server::state::AppState;
use crate::views;

/// `GET /login` - render the login form. No side effects.
pub async fn show_login_form(State(state): State<AppState>) -> Html<String> {
    Html(views::login_form(&state.locales, None, ""))
}

/// `POST /login` - process a login attempt.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let account = match verify(&state.pool, &form.email, &form.password).await {
        Ok(account) => account,
        Err(AppError::InvalidCredentials) => {
            let notification = state.locales.t("sessions.create.incorrect_details");
            let page = views::login_form(&state.locales, Some(&notification), form.email.trim());
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
        }
        Err(e) => return Err(e),
    };

    let session = create_session(&state.pool, account.id).await?;
    tracing::info!(account = %account.id, "logged in");

    let cookie = state.cookies.issue_session(&session.token);
    Ok(([(SET_COOKIE, cookie)], Redirect::to("/")).into_response())
}
