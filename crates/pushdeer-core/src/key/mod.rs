//! Push key domain module.
//!
//! # Module Structure
//!
//! - `model`: Push key record

mod model;

// Re-export public API
pub use model::{KeyList, PushKey};
