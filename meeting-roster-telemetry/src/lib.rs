use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const VERBOSE_LOG_LEVEL: &str = "warn,meeting_roster_cli=debug,meeting_roster_config=debug,\
                                     meeting_roster_optimizer=debug";

#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            VERBOSE_LOG_LEVEL.into()
        } else {
            DEFAULT_LOG_LEVEL.into()
        }
    })
}

/// Installs the global subscriber. Logs go to stderr, stdout is reserved for
/// the roster itself.
pub fn setup_telemetry(verbose: bool) {
    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(env_filter(verbose)))
        .init();

    tracing::trace!("telemetry initialized");
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::EnvFilter;

    use super::{DEFAULT_LOG_LEVEL, VERBOSE_LOG_LEVEL};

    #[test]
    fn log_levels_parse() -> Result<(), tracing_subscriber::filter::ParseError> {
        EnvFilter::try_new(DEFAULT_LOG_LEVEL)?;
        EnvFilter::try_new(VERBOSE_LOG_LEVEL)?;
        Ok(())
    }
}
