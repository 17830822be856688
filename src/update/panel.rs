//! Gesture message handlers for the hosted panel

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::AppModel;

/// Handle gesture input; ignored while no child is attached or it is being dismissed
pub fn update_panel(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    // Drags are normalized against the whole container, not just the panel
    let reference_extent = model.container.height();
    let Some(panel) = model.container.panel_mut() else {
        tracing::debug!(?msg, "no interactive panel, ignoring gesture");
        return None;
    };

    match msg {
        PanelMsg::TapEnded => {
            if panel.tap_ended() {
                Some(Cmd::ScheduleTick)
            } else {
                None
            }
        }

        PanelMsg::DragBegan { velocity } => {
            // Freezing the transition changes nothing on screen
            panel.drag_began(velocity);
            None
        }

        PanelMsg::DragChanged(sample) => {
            panel.drag_changed(sample, reference_extent);
            Some(Cmd::Redraw)
        }

        PanelMsg::DragEnded => {
            panel.drag_ended();
            if panel.controller().is_animating() {
                Some(Cmd::ScheduleTick)
            } else {
                None
            }
        }

        PanelMsg::Cancel => panel
            .cancel()
            .map(|state| Cmd::batch(vec![Cmd::Redraw, Cmd::StateSettled(state)])),
    }
}
