//! Feed Module
//!
//! The landing page. Greets the authenticated account and renders
//! post-redirect flash notifications.

/// Landing page handler
pub mod handlers;

pub use handlers::show_feed;
