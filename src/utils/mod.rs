use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `directive`; an unparsable directive falls back to `info`.
pub fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
