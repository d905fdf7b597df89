use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use super::config::LoggingConfig;
use super::error::Error;

/// Installs the global subscriber. `RUST_LOG` wins over `RUNNER_LOG`, which
/// wins over the configured level. Events go to stderr so result tables on
/// stdout stay clean.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("RUNNER_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()
    };

    result.map_err(|e| Error::LoggingError(e.to_string()))
}
