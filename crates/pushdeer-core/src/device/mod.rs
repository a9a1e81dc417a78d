//! Device domain module.
//!
//! # Module Structure
//!
//! - `model`: Registered device record and its registration payload

mod model;

// Re-export public API
pub use model::{DeviceInfo, DeviceList};
