/**
 * Registration Handlers
 *
 * `GET /sign_up` renders the registration form; `POST /sign_up` creates
 * an account and logs the new user straight in.
 *
 * # Registration Process
 *
 * 1. Validate name/email/password (explicit checks, all failures
 *    reported together)
 * 2. Reject an already-registered email with a form-level message
 * 3. Hash the password with bcrypt
 * 4. Insert the account; the unique index on email backstops the
 *    pre-check against concurrent submissions
 * 5. Create a session record, issue the cookie, redirect to `/`
 *
 * Invalid input re-renders the form with HTTP 422 and the entered
 * name/email preserved (never the password).
 */

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
    Form,
};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::SignupForm;
use crate::auth::sessions::create_session;
use crate::auth::users::{create_account, get_account_by_email, SignupInput};
use crate::error::AppError;
use crate::server::state::AppState;
use crate::views;

const EMAIL_TAKEN: &str = "Email has already been taken";

/// `GET /sign_up` - render the registration form.
pub async fn show_signup_form(State(state): State<AppState>) -> Html<String> {
    Html(views::signup_form(&state.locales, &[], "", ""))
}

/// `POST /sign_up` - validate input, create the account, log in.
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<Response, AppError> {
    let input = SignupInput {
        name: form.name.clone(),
        email: form.email.clone(),
        password: form.password,
    };

    let valid = match input.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            return Ok(rerender(&state, errors, &form.name, &form.email));
        }
    };

    if get_account_by_email(&state.pool, valid.email()).await?.is_some() {
        return Ok(rerender(
            &state,
            vec![EMAIL_TAKEN.to_string()],
            valid.name(),
            valid.email(),
        ));
    }

    let password_hash = hash(valid.password(), DEFAULT_COST)?;

    let account = match create_account(&state.pool, valid.name(), valid.email(), &password_hash).await
    {
        Ok(account) => account,
        // Concurrent registration slipped past the pre-check; the unique
        // index catches it and the user gets the same message.
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            return Ok(rerender(
                &state,
                vec![EMAIL_TAKEN.to_string()],
                valid.name(),
                valid.email(),
            ));
        }
        Err(e) => return Err(e.into()),
    };

    let session = create_session(&state.pool, account.id).await?;
    tracing::info!(account = %account.id, "account created");

    let set_cookies = AppendHeaders([
        (SET_COOKIE, state.cookies.issue_session(&session.token)),
        (SET_COOKIE, state.cookies.set_flash("users.create.success")),
    ]);
    Ok((set_cookies, Redirect::to("/")).into_response())
}

fn rerender(state: &AppState, errors: Vec<String>, name: &str, email: &str) -> Response {
    let page = views::signup_form(&state.locales, &errors, name.trim(), email.trim());
    (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response()
}
