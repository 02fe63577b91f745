use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber once for the whole binary.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` raises the
/// default filter from `info` to `debug`.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
