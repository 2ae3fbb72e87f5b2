use std::{env, path::PathBuf};

use fintrack_domain::TimeWindow;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the data directory.
pub const HOME_ENV_VAR: &str = "FINTRACK_HOME";
const DEFAULT_DIR_NAME: &str = ".fintrack";

/// Stores user-configurable tracker preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for stored data. Defaults to `~/.fintrack`.
    pub data_dir: Option<PathBuf>,
    #[serde(default = "Config::default_storage_key")]
    pub storage_key: String,
    #[serde(default)]
    pub default_window: TimeWindow,
    #[serde(default = "Config::default_log_directive")]
    pub log_directive: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: Self::default_storage_key(),
            default_window: TimeWindow::default(),
            log_directive: Self::default_log_directive(),
        }
    }
}

impl Config {
    pub fn default_storage_key() -> String {
        "transactions".into()
    }

    pub fn default_log_directive() -> String {
        "fintrack=info".into()
    }

    /// Explicit `data_dir`, then `$FINTRACK_HOME`, then `~/.fintrack`.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }
        if let Some(custom) = env::var_os(HOME_ENV_VAR) {
            return PathBuf::from(custom);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_data_dir_wins() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/fintrack-explicit")),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_data_dir(),
            PathBuf::from("/tmp/fintrack-explicit")
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").expect("empty object parses");
        assert_eq!(config, Config::default());

        let config: Config =
            serde_json::from_str(r#"{"default_window":"weekly"}"#).expect("partial config");
        assert_eq!(config.default_window, TimeWindow::Weekly);
        assert_eq!(config.storage_key, "transactions");
    }
}
