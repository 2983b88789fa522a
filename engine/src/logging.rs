use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. `RUST_LOG` wins over `default_directive`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(default_directive: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Logging initialized");
    }
}
