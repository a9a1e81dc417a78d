//! Operational log module.
//!
//! # Module Structure
//!
//! - `model`: LogDog record and level
//! - `service`: The `EventLog` sink the orchestrator reports through

mod model;
mod service;

pub use model::{LogDog, LogLevel};
pub use service::EventLog;
