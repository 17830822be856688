//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host should perform after an update.

use crate::transition::LogicalState;

/// Side effects requested by `update`
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the panel
    Redraw,
    /// Keep delivering `ContainerMsg::Tick` on the next frame
    ScheduleTick,
    /// A transition settled; notify observers of the new resting state
    StateSettled(LogicalState),
    /// The hosted child was detached
    ChildRemoved,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, flattening trivial cases
    pub fn batch(mut cmds: Vec<Cmd>) -> Self {
        cmds.retain(|cmd| *cmd != Cmd::None);
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::ScheduleTick => false,
            // Settling snaps the layout, which needs painting
            Cmd::StateSettled(_) => true,
            Cmd::ChildRemoved => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Check if the host loop should schedule another tick
    pub fn needs_tick(&self) -> bool {
        match self {
            Cmd::ScheduleTick => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_tick()),
            _ => false,
        }
    }

    /// Check if this command reports the child's removal
    pub fn removes_child(&self) -> bool {
        match self {
            Cmd::ChildRemoved => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.removes_child()),
            _ => false,
        }
    }

    /// Resting states reported by this command, in order
    pub fn settled_states(&self) -> Vec<LogicalState> {
        match self {
            Cmd::StateSettled(state) => vec![*state],
            Cmd::Batch(cmds) => cmds.iter().flat_map(|c| c.settled_states()).collect(),
            _ => Vec::new(),
        }
    }
}
