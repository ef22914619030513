/**
 * Feed Landing Page
 *
 * `GET /` renders the landing page. Logged-in visitors (resolved via
 * the session cookie) are greeted by name with a logout control;
 * anonymous visitors get login/sign-up links.
 *
 * If the request carries a `flash` cookie the key is resolved to its
 * localized message, rendered in the `.notification` banner, and the
 * cookie is cleared so the message shows exactly once.
 */

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::{Html, IntoResponse, Response},
};

use crate::auth::cookie::read_flash;
use crate::auth::MaybeAccount;
use crate::server::state::AppState;
use crate::views;

/// `GET /` - render the feed landing page.
pub async fn show_feed(
    State(state): State<AppState>,
    MaybeAccount(account): MaybeAccount,
    headers: HeaderMap,
) -> Response {
    let flash_key = read_flash(&headers);
    let notice = flash_key.as_deref().map(|key| state.locales.t(key));

    let page = views::feed_page(
        &state.locales,
        account.as_ref().map(|a| a.name.as_str()),
        notice.as_deref(),
    );

    if flash_key.is_some() {
        ([(SET_COOKIE, state.cookies.clear_flash())], Html(page)).into_response()
    } else {
        Html(page).into_response()
    }
}
