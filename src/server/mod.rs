//! Server Module
//!
//! Configuration, shared application state, and startup wiring.
//!
//! - **`config`** - environment-derived settings and pool creation
//! - **`state`** - the `AppState` handed to handlers
//! - **`init`** - app assembly

/// Environment configuration
pub mod config;

/// Shared application state
pub mod state;

/// Application assembly
pub mod init;
