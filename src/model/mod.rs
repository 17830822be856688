//! Application model - the complete state behind the sticky panel
//!
//! Follows the Elm Architecture: the model is plain data, mutated only by
//! `crate::update::update`.

use crate::config::PanelConfig;
use crate::container::{PanelContext, StickyContainer, TabBarContainer};
use crate::host::PanelFrame;
use crate::transition::LogicalState;

/// Root model: the tab-bar container and the config it was built from
#[derive(Debug)]
pub struct AppModel {
    pub container: TabBarContainer,
    pub config: PanelConfig,
}

impl AppModel {
    /// Model for a window of `height` units using `config`
    pub fn new(height: f64, config: PanelConfig) -> Self {
        Self {
            container: TabBarContainer::new(height, &config),
            config,
        }
    }

    /// Resting or in-flight state of the hosted child, if any
    pub fn panel_state(&self) -> Option<LogicalState> {
        self.container.panel().map(|panel| panel.state())
    }

    /// Current frame of the hosted child, if any
    pub fn panel_frame(&self) -> Option<PanelFrame> {
        self.container.panel().map(|panel| panel.frame())
    }
}

impl PanelContext for AppModel {
    fn sticky_container(&mut self) -> Option<&mut dyn StickyContainer> {
        Some(&mut self.container)
    }
}
