//! Environment-driven configuration.

use std::path::PathBuf;

use assetdesk_observability::{LogFormat, ParseLogFormatError};
use thiserror::Error;

pub const PREFERENCES_PATH_VAR: &str = "ASSETDESK_PREFERENCES_PATH";
pub const PREFERS_DARK_VAR: &str = "ASSETDESK_PREFERS_DARK";
pub const LOG_FORMAT_VAR: &str = "ASSETDESK_LOG_FORMAT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a boolean, got `{value}`")]
    InvalidBool { var: &'static str, value: String },

    #[error(transparent)]
    InvalidLogFormat(#[from] ParseLogFormatError),

    #[error("no user config directory; set ASSETDESK_PREFERENCES_PATH")]
    NoConfigDir,
}

/// Process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON file holding the persisted theme preference.
    pub preferences_path: PathBuf,
    /// System colour-scheme preference, used when no theme is stored.
    pub prefers_dark: bool,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let preferences_path = match lookup(PREFERENCES_PATH_VAR) {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_preferences_path()?,
        };

        let prefers_dark = match lookup(PREFERS_DARK_VAR) {
            Some(value) => parse_bool(PREFERS_DARK_VAR, &value)?,
            None => false,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            preferences_path,
            prefers_dark,
            log_format,
        })
    }
}

fn default_preferences_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("assetdesk").join("preferences.json"))
        .ok_or(ConfigError::NoConfigDir)
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
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
    fn reads_all_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            (PREFERENCES_PATH_VAR, "/tmp/assetdesk/prefs.json"),
            (PREFERS_DARK_VAR, "yes"),
            (LOG_FORMAT_VAR, "text"),
        ]))
        .unwrap();

        assert_eq!(config.preferences_path, PathBuf::from("/tmp/assetdesk/prefs.json"));
        assert!(config.prefers_dark);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[(PREFERENCES_PATH_VAR, "prefs.json")])).unwrap();

        assert!(!config.prefers_dark);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_malformed_bool() {
        let err = AppConfig::from_lookup(lookup(&[
            (PREFERENCES_PATH_VAR, "prefs.json"),
            (PREFERS_DARK_VAR, "sometimes"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidBool { var: PREFERS_DARK_VAR, .. }));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = AppConfig::from_lookup(lookup(&[
            (PREFERENCES_PATH_VAR, "prefs.json"),
            (LOG_FORMAT_VAR, "xml"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidLogFormat(_)));
    }
}
