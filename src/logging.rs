use tracing_subscriber::EnvFilter;

/// Initialise logging. The default level is `info`; setting `debug_logging`
/// in the settings file raises it to `debug`. When debug logging is enabled
/// the `RUST_LOG` environment variable may refine the filter further.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    // With debug logging off the filter is pinned to `info` so a stray
    // RUST_LOG in the environment cannot flood the console.
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
