//! Feedling
//!
//! A small server-rendered web application: user registration,
//! session-based login/logout, and a feed landing page.
//!
//! # Architecture
//!
//! - **`auth`** - accounts, credential verification, session records,
//!   cookies, and the auth HTTP handlers
//! - **`feed`** - the landing page
//! - **`views`** - server-rendered HTML
//! - **`i18n`** - localized display strings
//! - **`routes`** - the route table
//! - **`server`** - configuration, state, startup wiring
//! - **`error`** - the application error type
//!
//! Sessions are fully server-side: the browser holds only an opaque
//! random token in an HTTP-only cookie, tied to a persisted session
//! record that lives until explicit logout.

pub mod auth;
pub mod error;
pub mod feed;
pub mod i18n;
pub mod routes;
pub mod server;
pub mod views;
