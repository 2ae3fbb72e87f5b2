/// Installs the global fmt subscriber. `RUST_LOG` takes precedence over
/// `fallback_directive`; an already-installed subscriber is left in place.
pub fn init_tracing(fallback_directive: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_directive));

    let _ = fmt().with_env_filter(filter).try_init();
}
