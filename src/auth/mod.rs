//! Authentication Module
//!
//! User accounts, credential verification, session records, and the
//! cookie plumbing tying a browser to a session.
//!
//! # Module Structure
//!
//! - **`users`** - account model, validation, database operations
//! - **`credentials`** - email/password verification
//! - **`sessions`** - session record store and token generation
//! - **`cookie`** - session and flash cookie issue/read/clear
//! - **`middleware`** - `MaybeAccount` request extractor
//! - **`handlers`** - HTTP handlers for login/logout/sign-up
//!
//! # Authentication Flow
//!
//! 1. **Sign up**: validated account created, session record inserted,
//!    cookie issued
//! 2. **Login**: credentials verified, session record inserted, cookie
//!    issued
//! 3. **Logout**: session record deleted, cookie cleared
//!
//! Sessions are fully server-side: the cookie holds only an opaque,
//! cryptographically random token, and records live until explicit
//! logout.

/// Account model, validation and database operations
pub mod users;

/// Credential verification
pub mod credentials;

/// Session record store
pub mod sessions;

/// Session and flash cookies
pub mod cookie;

/// Request extractor for the current account
pub mod middleware;

/// HTTP handlers
pub mod handlers;

pub use handlers::{login, logout, show_login_form, show_signup_form, signup};
pub use middleware::MaybeAccount;
