//! Logging setup.

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "debug,tether_handle=info";

/// Install a `tracing` fmt subscriber.
///
/// Honours `RUST_LOG` when present and falls back to [`DEFAULT_FILTER`].
/// Calling it twice is harmless: the second installation is ignored.
pub fn init() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
