/**
 * Authentication Form Types
 *
 * Request bodies for the login and registration forms. Field names keep
 * the `user[...]` shape of the original HTML forms, mapped with serde
 * renames rather than nested deserialization.
 */

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginForm {
    /// Submitted email (untrusted, trimmed during verification)
    #[serde(rename = "user[email]")]
    pub email: String,
    /// Submitted password (untrusted, never logged)
    #[serde(rename = "user[password]")]
    pub password: String,
}

/// Body of `POST /sign_up`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignupForm {
    #[serde(rename = "user[name]")]
    pub name: String,
    #[serde(rename = "user[email]")]
    pub email: String,
    #[serde(rename = "user[password]")]
    pub password: String,
}
