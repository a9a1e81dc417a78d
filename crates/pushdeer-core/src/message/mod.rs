//! Message domain module.
//!
//! # Module Structure
//!
//! - `model`: Pushed/received message record and its content type
//! - `repository`: Durable, insert-only message storage

mod model;
mod repository;

// Re-export public API
pub use model::{Message, MessageList, MessageType};
pub use repository::MessageRepository;
