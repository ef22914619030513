/**
 * Session Record Store
 *
 * Persisted records representing active logins, one row per login event,
 * stored in the `app_sessions` table. Records are created on successful
 * login and deleted on explicit logout; there is no time-based expiry.
 *
 * # Tokens
 *
 * Each record carries an opaque token: 32 bytes from the OS CSPRNG,
 * hex-encoded (256 bits of entropy). A unique index on the token column
 * enforces uniqueness at the storage layer; given the entropy a collision
 * is treated as negligible, but an insert that does hit the index is
 * retried with a fresh token rather than surfaced.
 *
 * # Ownership
 *
 * Every session record belongs to exactly one account. `ON DELETE
 * CASCADE` on `user_id` guarantees no orphaned records survive an
 * account deletion.
 */

use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// One active login.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AppSession {
    /// Unique session record ID (UUID)
    pub id: Uuid,
    /// Owning account
    pub user_id: Uuid,
    /// Opaque token tying the cookie to this record
    pub token: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Generate a fresh session token: 32 CSPRNG bytes, hex-encoded.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Create a session record for `account_id`.
///
/// Generates the token here so callers never choose one. If the fresh
/// token collides with an existing row (astronomically unlikely), the
/// insert is retried with a new token.
pub async fn create_session(
    pool: &SqlitePool,
    account_id: Uuid,
) -> Result<AppSession, sqlx::Error> {
    loop {
        let token = generate_token();
        match insert_session(pool, account_id, &token).await {
            Ok(session) => return Ok(session),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                tracing::warn!("session token collision, regenerating");
                continue;
            }
            Err(e) => return Err(e),
        }
    }
}

async fn insert_session(
    pool: &SqlitePool,
    account_id: Uuid,
    token: &str,
) -> Result<AppSession, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, AppSession>(
        r#"
        INSERT INTO app_sessions (id, user_id, token, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, user_id, token, created_at
        "#,
    )
    .bind(id)
    .bind(account_id)
    .bind(token)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Look up a session record by its token.
pub async fn find_session_by_token(
    pool: &SqlitePool,
    token: &str,
) -> Result<Option<AppSession>, sqlx::Error> {
    sqlx::query_as::<_, AppSession>(
        r#"
        SELECT id, user_id, token, created_at
        FROM app_sessions
        WHERE token = ?
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await
}

/// Delete a session record by its token.
///
/// Idempotent: deleting a token that no longer exists returns `false`
/// and is not an error. Logout relies on this to treat an unknown token
/// as already-logged-out.
pub async fn delete_session_by_token(
    pool: &SqlitePool,
    token: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM app_sessions WHERE token = ?")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Number of session records owned by `account_id`.
pub async fn count_sessions_for_account(
    pool: &SqlitePool,
    account_id: Uuid,
) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM app_sessions WHERE user_id = ?")
            .bind(account_id)
            .fetch_one(pool)
            .await?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::users::create_account;
    use std::collections::HashSet;

    async fn test_pool() -> SqlitePool {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("migrations");
        pool
    }

    #[test]
    fn test_token_shape() {
        let token = generate_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_are_distinct_at_scale() {
        let mut seen = HashSet::new();
        for _ in 0..100_000 {
            assert!(seen.insert(generate_token()), "token collision");
        }
    }

    #[tokio::test]
    async fn test_create_and_find_session() {
        let pool = test_pool().await;
        let account = create_account(&pool, "Jerry", "jerry@example.com", "hash")
            .await
            .unwrap();

        let session = create_session(&pool, account.id).await.unwrap();
        assert_eq!(session.user_id, account.id);
        assert!(!session.token.is_empty());

        let found = find_session_by_token(&pool, &session.token)
            .await
            .unwrap()
            .expect("session exists");
        assert_eq!(found.id, session.id);
    }

    #[tokio::test]
    async fn test_two_logins_two_independent_records() {
        let pool = test_pool().await;
        let account = create_account(&pool, "Jerry", "jerry@example.com", "hash")
            .await
            .unwrap();

        let first = create_session(&pool, account.id).await.unwrap();
        let second = create_session(&pool, account.id).await.unwrap();

        assert_ne!(first.token, second.token);
        assert_eq!(count_sessions_for_account(&pool, account.id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let pool = test_pool().await;
        let account = create_account(&pool, "Jerry", "jerry@example.com", "hash")
            .await
            .unwrap();
        let session = create_session(&pool, account.id).await.unwrap();

        assert!(delete_session_by_token(&pool, &session.token).await.unwrap());
        // Second delete is a no-op, not a crash.
        assert!(!delete_session_by_token(&pool, &session.token).await.unwrap());
        assert!(find_session_by_token(&pool, &session.token)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_cascade_delete_with_account() {
        let pool = test_pool().await;
        let account = create_account(&pool, "Jerry", "jerry@example.com", "hash")
            .await
            .unwrap();
        let session = create_session(&pool, account.id).await.unwrap();

        crate::auth::users::delete_account(&pool, account.id)
            .await
            .unwrap();

        assert!(find_session_by_token(&pool, &session.token)
            .await
            .unwrap()
            .is_none());
    }
}
