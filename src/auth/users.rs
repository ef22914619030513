/**
 * Account Model and Database Operations
 *
 * This module defines the account record, the explicit validation of
 * registration input, and the database operations over the `users` table.
 *
 * # Validation
 *
 * Registration input is validated by an explicit function returning a
 * result type rather than declarative model constraints:
 *
 * - name: required, non-empty after trimming; stored trimmed
 * - email: required after trimming, must have non-empty parts around a
 *   single `@`, unique; stored trimmed
 * - password: at least 8 characters
 *
 * Email uniqueness is pre-checked for a friendly message, and also
 * enforced by a unique index so concurrent registrations cannot race
 * past the check.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// An account row in the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    /// Unique account ID (UUID)
    pub id: Uuid,
    /// Display name, stored trimmed
    pub name: String,
    /// Email address, unique, stored trimmed
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Raw, untrusted registration input as submitted by the form.
#[derive(Debug, Clone)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Registration input that passed validation. Name and email are
/// trimmed; constructing this type outside `SignupInput::validate` is
/// not possible.
#[derive(Debug, Clone)]
pub struct ValidSignup {
    name: String,
    email: String,
    password: String,
}

impl ValidSignup {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl SignupInput {
    /// Validate registration input.
    ///
    /// Returns the trimmed, checked fields on success, or the full list
    /// of per-field messages on failure (all failures are reported at
    /// once, not just the first).
    pub fn validate(self) -> Result<ValidSignup, Vec<String>> {
        let mut errors = Vec::new();

        let name = self.name.trim().to_string();
        if name.is_empty() {
            errors.push("Name can't be blank".to_string());
        }

        let email = self.email.trim().to_string();
        if email.is_empty() {
            errors.push("Email can't be blank".to_string());
        } else if !is_plausible_email(&email) {
            errors.push("Email is invalid".to_string());
        }

        if self.password.len() < 8 {
            errors.push("Password must be at least 8 characters".to_string());
        }

        if errors.is_empty() {
            Ok(ValidSignup {
                name,
                email,
                password: self.password,
            })
        } else {
            Err(errors)
        }
    }
}

/// Basic email shape check: non-empty local and domain parts around a
/// single `@`. Deliverability is not our problem; obvious garbage is.
fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(char::is_whitespace)
}

/// Insert a new account.
///
/// `email` and `name` must already be trimmed (see `SignupInput::validate`);
/// `password_hash` is the bcrypt hash, never the raw password. A unique
/// index on `email` rejects duplicates at the storage layer.
pub async fn create_account(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<Account, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO users (id, name, email, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, name, email, password_hash, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(account)
}

/// Get an account by email (exact match; callers trim first).
pub async fn get_account_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<Account>, sqlx::Error> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, name, email, password_hash, created_at, updated_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

/// Get an account by ID.
pub async fn get_account_by_id(
    pool: &SqlitePool,
    id: Uuid,
) -> Result<Option<Account>, sqlx::Error> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, name, email, password_hash, created_at, updated_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

/// Delete an account. Session records are removed by the `ON DELETE
/// CASCADE` on `app_sessions.user_id`.
pub async fn delete_account(pool: &SqlitePool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
