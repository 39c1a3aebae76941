//! Logging setup.
//!
//! Installs the global `tracing` subscriber used by every module.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. Returns `false` if a
/// subscriber was already installed, which leaves the existing one in place.
pub fn init_logger(default_level: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).with_target(true).finish();

    tracing::subscriber::set_global_default(subscriber).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        let _ = init_logger("debug");
        assert!(!init_logger("info"));
    }
}
