//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: Authenticated user profile snapshot

mod model;

// Re-export public API
pub use model::UserInfo;
