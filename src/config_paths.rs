//! Where sticky-panel keeps its files on disk
//!
//! Everything sits in one per-user directory named after the crate: the
//! panel config and a `logs/` subdirectory for the rolling log file.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "sticky-panel";

/// Per-user directory for config and logs.
///
/// `%APPDATA%` on Windows. Elsewhere `$XDG_CONFIG_HOME` wins when set, with
/// `~/.config` as the fallback. None when no home directory can be found.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// Panel config read by `PanelConfig::load`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Target of the daily log appender
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn create_all(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Could not create {}: {}", path.display(), e))
}

/// Create the log directory on first use and hand it back
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No per-user config directory".to_string())?;
    create_all(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_config_dir() {
        let Some(dir) = config_dir() else {
            return;
        };
        assert!(dir.ends_with(APP_DIR));
        assert_eq!(config_file(), Some(dir.join("config.yaml")));
        assert_eq!(logs_dir(), Some(dir.join("logs")));
    }
}
