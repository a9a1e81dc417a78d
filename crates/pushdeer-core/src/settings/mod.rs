//! Settings module.
//!
//! Persistent client settings: the session token and the identity of the
//! local device.

mod repository;

pub use repository::SettingStore;
