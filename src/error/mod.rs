//! Error Module
//!
//! Application error types and their HTTP response conversions.
//!
//! - **`types`** - the `AppError` enum and status code mapping
//! - **`conversion`** - `IntoResponse` implementation

/// Error type definitions
pub mod types;

/// HTTP response conversion
pub mod conversion;

pub use types::AppError;
