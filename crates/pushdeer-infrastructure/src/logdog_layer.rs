//! Tracing layer that turns LogDog events into records for the presentation layer.

use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;

use pushdeer_core::logdog::{LogDog, LogLevel};

use crate::tracing_event_log::LOGDOG_TARGET;

/// A layer that forwards every event on [`LOGDOG_TARGET`] as a [`LogDog`].
pub struct LogDogLayer {
    sender: mpsc::UnboundedSender<LogDog>,
}

impl LogDogLayer {
    pub fn new(sender: mpsc::UnboundedSender<LogDog>) -> Self {
        Self { sender }
    }
}

impl<S> Layer<S> for LogDogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if metadata.target() != LOGDOG_TARGET {
            return;
        }

        let mut fields = HashMap::new();
        event.record(&mut FieldVisitor(&mut fields));

        let level = if *metadata.level() == Level::ERROR {
            LogLevel::Error
        } else {
            LogLevel::Info
        };
        let mut take = |name: &str| fields.remove(name).unwrap_or_default();
        let record = LogDog::new(level, take("entry"), take("event"), take("detail"));

        // Receiver gone means nobody is watching the log view
        let _ = self.sender.send(record);
    }
}

/// Field visitor that keeps string renderings of every field.
struct FieldVisitor<'a>(&'a mut HashMap<String, String>);

impl tracing::field::Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0
            .insert(field.name().to_string(), format!("{:?}", value));
    }
}
