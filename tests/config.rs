//! Configuration system tests
//!
//! Tests for config paths and panel config loading/saving.

use std::time::Duration;

use sticky_panel::config::PanelConfig;
use sticky_panel::config_paths;
use sticky_panel::model::AppModel;
use sticky_panel::StickyContainer;
use tempfile::tempdir;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("sticky-panel"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Panel Config Tests
// ========================================================================

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = PanelConfig {
        collapsed_extent: 72.0,
        transition_duration_ms: 350,
        damping_ratio: 0.8,
        tab_bar_height: 83.0,
        full_screen_on_first_appearance: true,
    };
    config.save_to(&path).unwrap();

    let loaded = PanelConfig::load_from(&path);
    assert_eq!(loaded, config);
    assert_eq!(loaded.transition_duration(), Duration::from_millis(350));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let loaded = PanelConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(loaded, PanelConfig::default());
}

#[test]
fn test_invalid_yaml_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "collapsed_extent: [not, a, number\n").unwrap();

    assert_eq!(PanelConfig::load_from(&path), PanelConfig::default());
}

#[test]
fn test_out_of_range_values_are_sanitized_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "collapsed_extent: -20\ndamping_ratio: 0.5\n").unwrap();

    let loaded = PanelConfig::load_from(&path);
    assert_eq!(loaded.collapsed_extent, 50.0);
    assert_eq!(loaded.damping_ratio, 0.5);
}

#[test]
fn test_config_reaches_container() {
    let config = PanelConfig {
        collapsed_extent: 64.0,
        transition_duration_ms: 250,
        tab_bar_height: 100.0,
        ..PanelConfig::default()
    };
    let model = AppModel::new(900.0, config);

    assert_eq!(model.container.collapsed_extent(), 64.0);
    assert_eq!(
        model.container.transition_duration(),
        Duration::from_millis(250)
    );
    assert_eq!(model.container.full_extent(), 800.0);
}
