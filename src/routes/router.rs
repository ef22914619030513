/**
 * Router Configuration
 *
 * Assembles the full route table:
 *
 * | Method | Path      | Handler             |
 * |--------|-----------|---------------------|
 * | GET    | /         | feed landing page   |
 * | GET    | /sign_up  | registration form   |
 * | POST   | /sign_up  | create account      |
 * | GET    | /login    | login form          |
 * | POST   | /login    | process login       |
 * | DELETE | /logout   | process logout      |
 * | GET    | /up       | health check        |
 *
 * Static assets are served from `public/` under `/static`, and unknown
 * paths fall through to a plain 404.
 */

use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::Router;
use tower_http::services::ServeDir;

use crate::auth::handlers::{login, logout, show_login_form, show_signup_form, signup};
use crate::feed::show_feed;
use crate::server::state::AppState;

/// Health check. Returns 200 whenever the app is serving requests;
/// load balancers and uptime monitors poll this.
async fn health() -> &'static str {
    "ok"
}

/// Create the Axum router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_feed))
        .route("/sign_up", get(show_signup_form).post(signup))
        .route("/login", get(show_login_form).post(login))
        .route("/logout", delete(logout))
        .route("/up", get(health))
        .nest_service("/static", ServeDir::new("public"))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(state)
}
