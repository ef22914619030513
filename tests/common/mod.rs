//! Shared integration-test helpers.

pub mod auth_helpers;
pub mod database;
