//! Event log trait.

/// Structured sink for operational events.
///
/// The orchestrator records every absorbed failure here, tagged with the
/// operation name, so nothing is lost even when the caller ignores the error.
pub trait EventLog: Send + Sync {
    /// Records an informational event.
    fn info(&self, entry: &str, event: &str, detail: &str);

    /// Records a failure.
    fn error(&self, entry: &str, event: &str, detail: &str);
}
