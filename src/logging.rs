use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes diagnostic logging on stderr.
///
/// Stdout carries the run's console report, so log lines never go there.
/// `RUST_LOG` overrides the default `competitor_scraper=info` directive.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("competitor_scraper=info"));

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    // Ignore the error if a subscriber is already installed (e.g. by an embedding binary).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
