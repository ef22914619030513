//! Authentication test helpers
//!
//! Account seeding and login/logout flows against a `TestServer`.

use axum_test::{TestResponse, TestServer};
use feedling::auth::handlers::LoginForm;
use feedling::auth::cookie::CookieSettings;
use feedling::auth::users::{create_account, Account};
use feedling::server::init::build_app;
use feedling::server::state::AppState;
use sqlx::SqlitePool;

/// Low bcrypt cost keeps hashing fast under test.
pub const TEST_BCRYPT_COST: u32 = 4;

/// Spin up a test server over the given pool, with a cookie jar so
/// logins persist across requests.
pub fn test_server(pool: SqlitePool) -> TestServer {
    let state = AppState::new(pool, CookieSettings { secure: false });
    TestServer::builder()
        .save_cookies()
        .build(build_app(state))
        .expect("failed to start test server")
}

/// Seed an account directly in the database.
pub async fn create_test_account(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password: &str,
) -> Account {
    let hash = bcrypt::hash(password, TEST_BCRYPT_COST).expect("bcrypt hash");
    create_account(pool, name, email, &hash)
        .await
        .expect("failed to seed account")
}

/// Submit the login form.
pub async fn log_in(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/login")
        .form(&LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
}

/// Submit a logout.
pub async fn log_out(server: &TestServer) -> TestResponse {
    server.delete("/logout").await
}
