//! Application layer for the PushDeer client.
//!
//! [`Orchestrator`] keeps the session token and the device/key caches in
//! step with the remote service. Each operation returns a typed result;
//! [`Absorbing`] wraps the same operations for callers that prefer failures
//! to be logged and swallowed.

pub mod absorbing;
pub mod orchestrator;
pub mod state;

pub use absorbing::Absorbing;
pub use orchestrator::Orchestrator;
pub use state::ClientState;
