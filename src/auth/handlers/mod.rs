//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints:
//!
//! - **`show_login_form`** - GET /login
//! - **`login`** - POST /login
//! - **`logout`** - DELETE /logout
//! - **`show_signup_form`** - GET /sign_up
//! - **`signup`** - POST /sign_up

/// Request form types
pub mod types;

/// Login form rendering and processing
pub mod login;

/// Logout processing
pub mod logout;

/// Registration form rendering and processing
pub mod signup;

pub use login::{login, show_login_form};
pub use logout::logout;
pub use signup::{show_signup_form, signup};
pub use types::{LoginForm, SignupForm};
