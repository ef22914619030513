//! Database test fixtures
//!
//! Each test gets its own in-memory SQLite database with migrations
//! applied. A single connection keeps the in-memory database alive and
//! shared for the lifetime of the pool.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Create an isolated in-memory test database with the schema applied.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to create in-memory test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}
