// keyring-core/src/logging.rs
//
// Tracing setup for binaries and tests embedding the keyring core.
// The library itself only emits events; installing a subscriber is the host's call.

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when neither `RUST_LOG` nor an explicit directive is given.
pub const DEFAULT_FILTER: &str = "keyring_core=info";

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Invalid log filter '{0}': {1}")]
    InvalidFilter(String, String),

    #[error("Failed to initialize logging: {0}")]
    SubscriberInit(String),
}

/// Install a global fmt subscriber.
///
/// `directive` overrides `RUST_LOG`; when both are absent [`DEFAULT_FILTER`] is used.
pub fn init_logging(directive: Option<&str>) -> Result<(), LogError> {
    let filter = match directive {
        Some(d) => EnvFilter::try_new(d)
            .map_err(|e| LogError::InvalidFilter(d.to_string(), e.to_string()))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).compact())
        .try_init()
        .map_err(|e| LogError::SubscriberInit(e.to_string()))
}

/// Test helper: install a subscriber once, ignore "already set" on later calls.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = init_logging(Some("keyring_core=debug"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_rejected() {
        let result = init_logging(Some("keyring_core=notalevel"));
        assert!(matches!(result, Err(LogError::InvalidFilter(_, _))));
    }

    #[test]
    fn test_second_init_reports_error() {
        init_test_logging();
        // A global subscriber is already installed at this point.
        assert!(matches!(
            init_logging(Some("info")),
            Err(LogError::SubscriberInit(_))
        ));
    }
}
