//! Tracing initialisation for binaries and tests.

use tracing_subscriber::EnvFilter;

/// Installs a console subscriber honouring `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops so tests can each
/// request initialisation.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tv_catalog=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
