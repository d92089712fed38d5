// src/infrastructure/telemetry.rs
use crate::config::RequestLogConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber using the configured filter directives.
/// Calling this twice leaves the first subscriber in place.
pub fn init_tracing(config: &RequestLogConfig) {
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(config.log_filter()))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
