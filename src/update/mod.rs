//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod container;
mod panel;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::messages::ContainerMsg;
#[cfg(debug_assertions)]
use crate::tracing::PanelSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use container::update_container;
pub use panel::update_panel;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::Container(m) => container::update_container(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    // Frame ticks arrive every few milliseconds
    let is_noisy = matches!(msg, Msg::Container(ContainerMsg::Tick(_)));

    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = ?msg).entered())
    };

    let before = PanelSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = ?msg, "processing");
    }

    let result = update_inner(model, msg);

    let after = PanelSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "panel", %diff, "state changed");
    }

    result
}
