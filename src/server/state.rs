/**
 * Application State
 *
 * Central state container handed to every handler via Axum's `State`
 * extractor. Holds the database pool, the localization table, and the
 * cookie settings. All of it is cheap to clone: the pool is internally
 * reference-counted and the locale table sits behind an `Arc`.
 *
 * There is deliberately no ambient request or session global anywhere;
 * everything a handler needs arrives through this struct or through the
 * request itself.
 */

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::cookie::CookieSettings;
use crate::i18n::Locales;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Localized display strings
    pub locales: Arc<Locales>,
    /// Session/flash cookie attributes
    pub cookies: CookieSettings,
}

impl AppState {
    pub fn new(pool: SqlitePool, cookies: CookieSettings) -> Self {
        Self {
            pool,
            locales: Arc::new(Locales::load_default()),
            cookies,
        }
    }
}
