use tracing_subscriber::EnvFilter;

/// Stderr logging with `RUST_LOG` override; defaults to warnings only, which
/// keeps parse warnings visible without flooding runs with engine events.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
