use std::fs;

use billtrack_config::{Config, ConfigError, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_matches_form_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.max_instances, 52);
    assert_eq!(cfg.preview_count, 3);
    assert_eq!(cfg.default_reminder_days, Some(3));
    assert_eq!(cfg.due_soon_days, 7);
    assert!(cfg.validate().is_ok());
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded, Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("billtrack")).expect("manager");

    let cfg = Config {
        max_instances: 12,
        preview_count: 5,
        default_reminder_days: None,
        due_soon_days: 3,
    };
    manager.save(&cfg).expect("save config");
    assert!(manager.config_path().exists());
    assert!(!manager.config_path().with_extension("json.tmp").exists());

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded, cfg);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "preview_count": 6 }"#).expect("write config");

    let loaded = ConfigManager::new(path).load().expect("load config");
    assert_eq!(loaded.preview_count, 6);
    assert_eq!(loaded.max_instances, 52);
    assert_eq!(loaded.default_reminder_days, Some(3));
}

#[test]
fn out_of_range_cap_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "max_instances": 60 }"#).expect("write config");

    let err = ConfigManager::new(path).load().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let manager = ConfigManager::new(dir.path().join("other.json"));
    let zero_cap = Config {
        max_instances: 0,
        ..Config::default()
    };
    assert!(matches!(manager.save(&zero_cap), Err(ConfigError::Invalid(_))));
}

#[test]
fn malformed_json_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").expect("write config");

    let err = ConfigManager::new(path).load().unwrap_err();
    assert!(matches!(err, ConfigError::Serde(_)));
}
