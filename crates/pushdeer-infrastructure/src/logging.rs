//! Tracing subscriber setup.

use tokio::sync::mpsc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use pushdeer_core::logdog::LogDog;
use pushdeer_core::{PushDeerError, Result};

use crate::config::LoggingConfig;
use crate::logdog_layer::LogDogLayer;

/// Installs the global subscriber.
///
/// Console output honours `config.filter`; LogDog records bypass the filter
/// and are delivered on the returned receiver.
///
/// # Errors
///
/// Returns a `Config` error if the filter does not parse or a global
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<mpsc::UnboundedReceiver<LogDog>> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| PushDeerError::config(format!("Invalid log filter '{}': {}", config.filter, e)))?;

    let (sender, receiver) = mpsc::unbounded_channel();

    tracing_subscriber::registry()
        .with(fmt::layer().with_filter(filter))
        .with(LogDogLayer::new(sender))
        .try_init()
        .map_err(|e| PushDeerError::config(format!("Failed to install tracing subscriber: {}", e)))?;

    Ok(receiver)
}
