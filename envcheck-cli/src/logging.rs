use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. Filter comes from `RUST_LOG`,
/// defaulting to `warn`; stdout is reserved for the report.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Fails only when a subscriber is already installed, which is harmless.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
