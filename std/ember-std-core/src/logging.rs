//!
//! Logging setup for the runtime.
//!
//! Logs go to stderr so they never interleave with program output on
//! stdout.
//!

use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_LOG_FILTER, RuntimeConfig};

/// Install the global tracing subscriber. Returns `false` if one was
/// already installed (by an earlier call or by the embedding program).
pub fn init(config: &RuntimeConfig) -> bool {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(config.log_ansi)
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = RuntimeConfig {
            log_filter: "not a [valid filter".to_string(),
            log_ansi: false,
        };

        let first = init(&config);
        let second = init(&RuntimeConfig::default());

        assert!(first);
        assert!(!second);
    }
}
