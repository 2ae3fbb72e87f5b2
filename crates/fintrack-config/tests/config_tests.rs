use std::{fs, path::PathBuf};

use fintrack_config::{Config, ConfigError, ConfigManager};
use fintrack_domain::TimeWindow;
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert_eq!(cfg.storage_key, "transactions");
    assert!(!cfg.log_directive.is_empty());
    assert_eq!(cfg.default_window, TimeWindow::All);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("nested")).expect("manager");

    assert_eq!(manager.load().expect("load"), Config::default());
    assert!(!manager.config_path().exists());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let cfg = Config {
        data_dir: Some(PathBuf::from("/srv/finance")),
        storage_key: "household".to_string(),
        default_window: TimeWindow::Monthly,
        log_directive: "fintrack=debug".to_string(),
    };

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
}

#[test]
fn malformed_config_is_a_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, "{ storage_key: ").expect("write garbage");

    let manager = ConfigManager::new(path);
    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}
