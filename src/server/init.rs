/**
 * Server Initialization
 *
 * Wires configuration, database pool, application state, and router
 * together into a servable Axum app.
 *
 * # Initialization Process
 *
 * 1. Connect the database pool and run migrations (fatal on failure)
 * 2. Build `AppState` (pool, locales, cookie settings)
 * 3. Assemble the router
 *
 * `build_app` is split out so tests can inject an in-memory pool and
 * drive the exact router the binary serves.
 */

use axum::Router;

use crate::auth::cookie::CookieSettings;
use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Create the Axum application from configuration.
///
/// # Errors
///
/// Returns the underlying `sqlx` error if the database cannot be
/// reached or migrated; the caller is expected to abort startup.
pub async fn create_app(config: &ServerConfig) -> Result<Router, sqlx::Error> {
    let pool = config.connect_database().await?;

    let state = AppState::new(
        pool,
        CookieSettings {
            secure: config.secure_cookies,
        },
    );

    Ok(build_app(state))
}

/// Build the router from already-constructed state.
pub fn build_app(state: AppState) -> Router {
    create_router(state)
}
