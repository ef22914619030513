/**
 * Current Account Extractor
 *
 * Resolves the request's session cookie to its account, if any. Pages
 * that render differently for logged-in visitors take `MaybeAccount`
 * as an extractor; none of the routes in this app hard-require
 * authentication, so there is no rejecting variant.
 *
 * Resolution: read the `app_session` cookie, look up the session
 * record by token, then load the owning account. A missing cookie,
 * unknown token, or (post-cascade) missing account all resolve to
 * anonymous. Database failures propagate as errors.
 */

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::cookie::read_session_token;
use crate::auth::sessions::find_session_by_token;
use crate::auth::users::{get_account_by_id, Account};
use crate::error::AppError;
use crate::server::state::AppState;

/// The authenticated account for this request, or `None` for an
/// anonymous visitor.
#[derive(Debug, Clone)]
pub struct MaybeAccount(pub Option<Account>);

impl FromRequestParts<AppState> for MaybeAccount {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = read_session_token(&parts.headers) else {
            return Ok(MaybeAccount(None));
        };

        let Some(session) = find_session_by_token(&state.pool, &token).await? else {
            // Stale cookie from a deleted session; treat as anonymous.
            return Ok(MaybeAccount(None));
        };

        let account = get_account_by_id(&state.pool, session.user_id).await?;
        Ok(MaybeAccount(account))
    }
}
