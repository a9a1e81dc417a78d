//! EventLog implementation on top of `tracing`.

use pushdeer_core::logdog::EventLog;

/// Target every LogDog event is emitted on.
pub const LOGDOG_TARGET: &str = "pushdeer::logdog";

/// Emits operational events as `tracing` events on [`LOGDOG_TARGET`].
///
/// Install [`LogDogLayer`](crate::logdog_layer::LogDogLayer) to turn them
/// back into `LogDog` records.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventLog;

impl EventLog for TracingEventLog {
    fn info(&self, entry: &str, event: &str, detail: &str) {
        tracing::info!(target: LOGDOG_TARGET, entry, event, detail, "{}: {}", entry, event);
    }

    fn error(&self, entry: &str, event: &str, detail: &str) {
        tracing::error!(target: LOGDOG_TARGET, entry, event, detail, "{}: {}", entry, detail);
    }
}
