//! Container message handlers
//!
//! Programmatic expand/collapse, removal, resizing and frame ticks.

use crate::commands::Cmd;
use crate::container::StickyContainer;
use crate::messages::ContainerMsg;
use crate::model::AppModel;

/// Update function for container messages
pub fn update_container(model: &mut AppModel, msg: ContainerMsg) -> Option<Cmd> {
    let container = &mut model.container;

    match msg {
        ContainerMsg::Collapse => {
            container.panel()?;
            container.collapse_child();
            tick_if_needed(container.needs_tick())
        }

        ContainerMsg::Expand => {
            container.panel()?;
            container.expand_child();
            tick_if_needed(container.needs_tick())
        }

        ContainerMsg::Dismiss { animated } => {
            container.panel()?;

            // Settle any in-flight transition first so observers hear about it
            let settled = container.panel_mut().and_then(|panel| panel.cancel());
            container.remove_child(animated);

            let mut cmds = vec![Cmd::Redraw];
            if let Some(state) = settled {
                cmds.push(Cmd::StateSettled(state));
            }
            if container.child().is_none() {
                cmds.push(Cmd::ChildRemoved);
            } else if container.needs_tick() {
                cmds.push(Cmd::ScheduleTick);
            }
            Some(Cmd::batch(cmds))
        }

        ContainerMsg::Resize { height } => {
            container.resize(height);
            Some(Cmd::Redraw)
        }

        ContainerMsg::Tick(dt) => {
            if !container.needs_tick() {
                return None;
            }
            let outcome = container.tick(dt);

            let mut cmds = vec![Cmd::Redraw];
            if let Some(state) = outcome.settled {
                cmds.push(Cmd::StateSettled(state));
            }
            if outcome.removed {
                cmds.push(Cmd::ChildRemoved);
            }
            if container.needs_tick() {
                cmds.push(Cmd::ScheduleTick);
            }
            Some(Cmd::batch(cmds))
        }
    }
}

fn tick_if_needed(needs_tick: bool) -> Option<Cmd> {
    if needs_tick {
        Some(Cmd::ScheduleTick)
    } else {
        None
    }
}
