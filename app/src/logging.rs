use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_FILTER: &str = "info";

// Console logging for the binary. `log` records from the library crates are
// forwarded into the same subscriber.
//
// RUST_LOG wins over `level`, which wins over [`DEFAULT_FILTER`].
pub fn init_logging(level: Option<&str>) {
    let filter_str = level.filter(|l| !l.is_empty()).unwrap_or(DEFAULT_FILTER);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}
