/**
 * Server Configuration
 *
 * Loads server configuration from environment variables (a `.env` file
 * is honored if present, via `dotenv` in `main`).
 *
 * # Variables
 *
 * - `DATABASE_URL` - SQLite URL, default `sqlite://feedling.db`
 * - `SERVER_PORT` - listen port, default 3000
 * - `SECURE_COOKIES` - mark cookies `Secure`; set to `true` behind TLS
 *
 * # Error Handling
 *
 * Unlike optional services, the database is required: a connection or
 * migration failure here is fatal and aborts startup. A web app whose
 * storage engine is down cannot limp along meaningfully.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Runtime configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// SQLite database URL
    pub database_url: String,
    /// Whether issued cookies carry the `Secure` attribute
    pub secure_cookies: bool,
}

impl ServerConfig {
    /// Read configuration from the environment, with development
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://feedling.db".to_string());

        let secure_cookies = std::env::var("SECURE_COOKIES")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Self {
            port,
            database_url,
            secure_cookies,
        }
    }

    /// Create the SQLite connection pool and run migrations.
    ///
    /// Foreign keys are switched on per-connection so the session
    /// records' `ON DELETE CASCADE` actually fires; SQLite leaves them
    /// off by default.
    pub async fn connect_database(&self) -> Result<SqlitePool, sqlx::Error> {
        tracing::info!("connecting to database at {}", self.database_url);

        let options = SqliteConnectOptions::from_str(&self.database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_in_memory_database() {
        // Shared cache keeps the in-memory database visible to every
        // pooled connection, not just the one that ran the migrations.
        let config = ServerConfig {
            port: 0,
            database_url: "sqlite:file:config_test?mode=memory&cache=shared".to_string(),
            secure_cookies: false,
        };
        let pool = config.connect_database().await.expect("pool");

        // Migrations created the tables.
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
