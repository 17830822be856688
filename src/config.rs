//! Panel configuration persistence
//!
//! Stores panel preferences in `~/.config/sticky-panel/config.yaml`

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Sticky panel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Extent of the minimized strip
    #[serde(default = "default_collapsed_extent")]
    pub collapsed_extent: f64,

    /// Length of a full expand or collapse
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: u64,

    /// Spring damping ratio (1.0 = critically damped, no overshoot)
    #[serde(default = "default_damping_ratio")]
    pub damping_ratio: f64,

    /// Height of the tab bar the panel sits on
    #[serde(default = "default_tab_bar_height")]
    pub tab_bar_height: f64,

    /// Expand the child as soon as it is configured
    #[serde(default)]
    pub full_screen_on_first_appearance: bool,
}

fn default_collapsed_extent() -> f64 {
    50.0
}

fn default_transition_duration_ms() -> u64 {
    500
}

fn default_damping_ratio() -> f64 {
    1.0
}

fn default_tab_bar_height() -> f64 {
    49.0
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            collapsed_extent: default_collapsed_extent(),
            transition_duration_ms: default_transition_duration_ms(),
            damping_ratio: default_damping_ratio(),
            tab_bar_height: default_tab_bar_height(),
            full_screen_on_first_appearance: false,
        }
    }
}

impl PanelConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<PanelConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }

    /// Replace out-of-range values with defaults
    pub fn sanitized(mut self) -> Self {
        if !self.collapsed_extent.is_finite() || self.collapsed_extent < 0.0 {
            tracing::warn!(
                "Invalid collapsed_extent {}, using default",
                self.collapsed_extent
            );
            self.collapsed_extent = default_collapsed_extent();
        }
        if !self.damping_ratio.is_finite() || self.damping_ratio <= 0.0 {
            tracing::warn!("Invalid damping_ratio {}, using default", self.damping_ratio);
            self.damping_ratio = default_damping_ratio();
        }
        if !self.tab_bar_height.is_finite() || self.tab_bar_height < 0.0 {
            tracing::warn!(
                "Invalid tab_bar_height {}, using default",
                self.tab_bar_height
            );
            self.tab_bar_height = default_tab_bar_height();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PanelConfig::default();
        assert_eq!(config.collapsed_extent, 50.0);
        assert_eq!(config.transition_duration(), Duration::from_millis(500));
        assert_eq!(config.damping_ratio, 1.0);
        assert!(!config.full_screen_on_first_appearance);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: PanelConfig = serde_yaml::from_str("collapsed_extent: 64\n").unwrap();
        assert_eq!(config.collapsed_extent, 64.0);
        assert_eq!(config.transition_duration_ms, 500);
        assert_eq!(config.tab_bar_height, 49.0);
    }

    #[test]
    fn test_sanitize_rejects_negative_values() {
        let config = PanelConfig {
            collapsed_extent: -1.0,
            damping_ratio: 0.0,
            tab_bar_height: f64::NAN,
            ..PanelConfig::default()
        }
        .sanitized();
        assert_eq!(config, PanelConfig::default());
    }
}
