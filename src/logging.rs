use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber, writing to stderr so stdout stays free
/// for the report.
///
/// Uses RUST_LOG for filtering when set; otherwise `info`, or `debug` for
/// this crate when `verbose` is on.
pub fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "info,safehealth=debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
