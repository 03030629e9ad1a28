//! Subscriber setup

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use tripscope_domain::{LoggingConfig, Result, TripscopeError};

/// Filter from `RUST_LOG` when set, otherwise from the configured level.
///
/// # Errors
/// Returns `TripscopeError::Config` if the configured level is not a valid
/// filter directive.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| TripscopeError::Config(format!("Invalid log level '{level}': {e}"))),
    }
}

/// Install the global subscriber, writing to stderr so command output on
/// stdout stays machine-readable.
///
/// # Errors
/// Returns `TripscopeError::Config` for an invalid level and
/// `TripscopeError::Internal` if a subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(&config.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry.with(fmt::layer().json().with_writer(std::io::stderr)).try_init()
    } else {
        registry.with(fmt::layer().with_target(false).with_writer(std::io::stderr)).try_init()
    };

    installed.map_err(|e| TripscopeError::Internal(format!("Failed to install subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_level() {
        std::env::remove_var("RUST_LOG");
        let result = build_filter("tripscope=[[");
        assert!(matches!(result, Err(TripscopeError::Config(_))));
    }

    #[test]
    fn accepts_directives() {
        std::env::remove_var("RUST_LOG");
        assert!(build_filter("info,tripscope_core=debug").is_ok());
    }

    #[test]
    fn second_install_fails_cleanly() {
        let config = LoggingConfig::default();
        let _ = init_tracing(&config);

        let second = init_tracing(&config);
        assert!(matches!(second, Err(TripscopeError::Internal(_))));
    }
}
