//! Tracing setup for the replay tool and embedding hosts
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=sticky_panel::transition=trace` - module-level filtering
//!
//! Logs are also written to `~/.config/sticky-panel/logs/sticky-panel.log`
//! with daily rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::AppModel;
use crate::transition::LogicalState;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so it never mixes with replay output on stdout.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "sticky-panel.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of panel state for diffing around an update
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSnapshot {
    pub attached: bool,
    pub state: Option<LogicalState>,
    pub transitioning: bool,
    pub dismissing: bool,
}

impl PanelSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        let panel = model.container.panel();
        Self {
            attached: panel.is_some(),
            state: panel.map(|p| p.state()),
            transitioning: panel.is_some_and(|p| p.controller().is_transitioning()),
            dismissing: model.container.is_dismissing(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &PanelSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.attached != other.attached {
            let status = if other.attached { "attached" } else { "removed" };
            changes.push(format!("child {}", status));
        }
        if self.state != other.state {
            changes.push(format!("state: {:?} → {:?}", self.state, other.state));
        }
        if self.transitioning != other.transitioning {
            let status = if other.transitioning {
                "started"
            } else {
                "ended"
            };
            changes.push(format!("transition {}", status));
        }
        if self.dismissing != other.dismissing && other.dismissing {
            changes.push("dismissal started".to_string());
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
