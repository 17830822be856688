//! Sticky panel - expandable child panel for tab-bar containers
//!
//! A minimized strip that sits on top of a tab bar and can be tapped or
//! dragged to full screen, collapsed again, or dismissed. The interesting part
//! is the transition controller: drags interrupt and scrub a running
//! animation, and the release velocity decides whether it completes or
//! reverses.
//!
//! Input and ticks flow through an Elm-style `Msg` → `update` → `Cmd` loop.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod container;
pub mod host;
pub mod messages;
pub mod model;
pub mod replay;
pub mod tracing;
pub mod transition;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::PanelConfig;
pub use container::{container_for, Expandable, StickyContainer, TabBarContainer};
pub use host::{HostAdapter, PanelFrame};
pub use messages::Msg;
pub use model::AppModel;
pub use transition::{LogicalState, TransitionController};
