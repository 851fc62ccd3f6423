//!
//! Runtime Configuration
//!
//! The runtime is linked into compiled programs, so its only configuration
//! source is the process environment:
//!
//! - `EMBER_LOG` - tracing filter directive (default `warn`)
//! - `EMBER_LOG_ANSI` - colored log output (`1`, `true`, `yes`, `on`)
//!

pub const LOG_ENV: &str = "EMBER_LOG";
pub const LOG_ANSI_ENV: &str = "EMBER_LOG_ANSI";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub log_filter: String,
    pub log_ansi: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_ansi: false,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source. Unset, blank or
    /// unparseable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_ENV) {
            let filter = filter.trim();
            if !filter.is_empty() {
                config.log_filter = filter.to_string();
            }
        }

        if let Some(ansi) = lookup(LOG_ANSI_ENV).as_deref().and_then(parse_flag) {
            config.log_ansi = ansi;
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RuntimeConfig::from_lookup(|_| None);
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.log_filter, "warn");
        assert!(!config.log_ansi);
    }

    #[test]
    fn test_reads_filter_and_ansi() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[
            ("EMBER_LOG", "ember_std_core=trace"),
            ("EMBER_LOG_ANSI", "Yes"),
        ]));
        assert_eq!(config.log_filter, "ember_std_core=trace");
        assert!(config.log_ansi);
    }

    #[test]
    fn test_blank_and_invalid_values_keep_defaults() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[
            ("EMBER_LOG", "   "),
            ("EMBER_LOG_ANSI", "maybe"),
        ]));
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("ON"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag(""), None);
    }
}
