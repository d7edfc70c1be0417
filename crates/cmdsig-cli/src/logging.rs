use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `cmdsig_core=trace`)
pub const LOG_ENV: &str = "CMDSIG_LOG";

/// Initialize tracing on stderr so stdout only ever carries the result.
///
/// Defaults to `warn` when `CMDSIG_LOG` is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
