/**
 * Credential Verifier
 *
 * Given an email and password from an untrusted form submission, looks
 * up the matching account and checks the password against its stored
 * bcrypt hash.
 *
 * # Security
 *
 * - The failure result is a single generic `InvalidCredentials`; callers
 *   can never tell whether the email existed.
 * - bcrypt's verify performs the comparison appropriate to the hash
 *   scheme; raw passwords are never logged.
 * - Email is trimmed before lookup; matching is otherwise exact
 *   (no case folding).
 */

use sqlx::SqlitePool;

use crate::auth::users::{get_account_by_email, Account};
use crate::error::AppError;

/// Verify an email/password pair.
///
/// Returns the matched account, `AppError::InvalidCredentials` for any
/// mismatch (unknown email or wrong password), or an infrastructure
/// error if the database or bcrypt fails. Read-only: no records are
/// touched.
pub async fn verify(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<Account, AppError> {
    let email = email.trim();

    let account = get_account_by_email(pool, email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("login attempt for unknown email");
            AppError::InvalidCredentials
        })?;

    let valid = bcrypt::verify(password, &account.password_hash)?;
    if !valid {
        tracing::warn!(account = %account.id, "login attempt with wrong password");
        return Err(AppError::InvalidCredentials);
    }

    Ok(account)
}
