//! Log configuration from environment variables

use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "stemlab=info,warn";
pub const LOG_FILE_PREFIX: &str = "stemlab.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directives (e.g. "stemlab=debug,info")
    pub log_level: String,
    /// Directory for the rolling log file
    pub log_dir: PathBuf,
    pub format: LogFormat,
    /// Mirror events to stderr
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: PathBuf::from("logs"),
            format: LogFormat::Text,
            stderr: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. `RUST_LOG` wins over
    /// `STEMLAB_LOG_LEVEL`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("RUST_LOG")
                .or_else(|| lookup("STEMLAB_LOG_LEVEL"))
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),
            log_dir: lookup("STEMLAB_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            format: lookup("STEMLAB_LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
            stderr: lookup("STEMLAB_LOG_STDERR").map(|v| v == "1").unwrap_or(false),
        }
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LogConfig::from_lookup(lookup(&[]));
        assert_eq!(config, LogConfig::default());
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_rust_log_wins() {
        let config = LogConfig::from_lookup(lookup(&[
            ("RUST_LOG", "stemlab=debug"),
            ("STEMLAB_LOG_LEVEL", "error"),
        ]));
        assert_eq!(config.log_level, "stemlab=debug");
        assert!(config.is_debug_enabled());

        let config = LogConfig::from_lookup(lookup(&[("STEMLAB_LOG_LEVEL", "error")]));
        assert_eq!(config.log_level, "error");
    }

    #[test]
    fn test_overrides() {
        let config = LogConfig::from_lookup(lookup(&[
            ("STEMLAB_LOG_DIR", "/tmp/stemlab-logs"),
            ("STEMLAB_LOG_FORMAT", "JSON"),
            ("STEMLAB_LOG_STDERR", "1"),
        ]));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/stemlab-logs"));
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.stderr);
    }
}
