use tracing_subscriber::EnvFilter;

const ENV_VAR: &str = "XJS_LOG";

/// Logs to stderr, filtered by `XJS_LOG` (`warn` when unset).
pub(crate) fn init() {
    let filter = EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
