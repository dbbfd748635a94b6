use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `debug` or `pamfax_client=trace`
pub const LOG_LEVEL_ENV: &str = "LOGLEVEL";

static LOGGER: OnceCell<()> = OnceCell::new();

/// Installs a `tracing` fmt subscriber filtered by [`LOG_LEVEL_ENV`] (default `info`)
///
/// Safe to call more than once: only the first call installs the subscriber,
/// and an already installed global subscriber is left untouched.
pub fn setup_logger() {
    LOGGER.get_or_init(|| {
        let filter =
            EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}
