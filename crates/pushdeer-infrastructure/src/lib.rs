//! Infrastructure for the PushDeer client: file-backed collaborators,
//! configuration and logging.

pub mod config;
pub mod json_message_repository;
pub mod logdog_layer;
pub mod logging;
pub mod paths;
pub mod storage;
pub mod toml_setting_store;
pub mod tracing_event_log;

pub use crate::config::ClientConfig;
pub use crate::json_message_repository::JsonMessageRepository;
pub use crate::logdog_layer::LogDogLayer;
pub use crate::toml_setting_store::TomlSettingStore;
pub use crate::tracing_event_log::TracingEventLog;
