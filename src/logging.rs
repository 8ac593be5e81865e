use tracing_subscriber::EnvFilter;

/// Initialize tracing output to stderr, filtered by `RUST_LOG` (default
/// `info`). Stdout stays reserved for the resolved link and output paths.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
