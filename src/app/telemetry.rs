use tracing_bunyan_formatter::{
    BunyanFormattingLayer,
    JsonStorageLayer,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{
    EnvFilter,
    Registry,
};

/// Install the global `tracing` subscriber: bunyan formatted JSON on stdout.
///
/// `RUST_LOG` takes precedence over `default_env_filter`. Records emitted
/// through `log` (e.g. by `sqlx`) are forwarded to the same subscriber.
/// Calling it twice is harmless: the second call only reports that a
/// subscriber is already set.
pub fn setup_tracing(name: String, default_env_filter: String) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, std::io::stdout);

    if let Err(e) = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
        .try_init()
    {
        eprintln!("tracing subscriber already installed: {}", e);
    }
}
