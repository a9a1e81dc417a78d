//! Domain layer of the PushDeer client.
//!
//! Holds the records the client synchronizes (user, devices, keys,
//! messages), the error type shared by every crate, and the traits for the
//! collaborators the orchestrator depends on:
//!
//! - [`api::PushDeerApi`]: remote service transport
//! - [`settings::SettingStore`]: persisted token and device identity
//! - [`message::MessageRepository`]: durable message history
//! - [`logdog::EventLog`]: operational event sink

pub mod api;
pub mod device;
pub mod error;
pub mod key;
pub mod logdog;
pub mod message;
pub mod settings;
pub mod user;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export common error type
pub use error::{PushDeerError, Result};
