//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::Duration;

use sticky_panel::config::PanelConfig;
use sticky_panel::container::{SimpleChild, StickyContainer};
use sticky_panel::host::{HostAdapter, PanelFrame};
use sticky_panel::messages::Msg;
use sticky_panel::model::AppModel;
use sticky_panel::transition::{LogicalState, TransitionController};
use sticky_panel::update::update;
use sticky_panel::Cmd;

pub const FRAME: Duration = Duration::from_millis(16);
pub const FULL_EXTENT: f64 = 800.0;
pub const MINIMIZED_EXTENT: f64 = 50.0;

/// Everything the controller asked the host to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCall {
    Progress(f64),
    Terminal(LogicalState),
}

/// Host that records every call and keeps the resulting frame
#[derive(Debug, Clone)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    pub frame: PanelFrame,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            frame: PanelFrame::resting(MINIMIZED_EXTENT, FULL_EXTENT, LogicalState::Collapsed),
        }
    }

    pub fn progress_values(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Progress(v) => Some(*v),
                HostCall::Terminal(_) => None,
            })
            .collect()
    }

    pub fn terminals(&self) -> Vec<LogicalState> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Terminal(state) => Some(*state),
                HostCall::Progress(_) => None,
            })
            .collect()
    }
}

impl HostAdapter for RecordingHost {
    fn full_extent(&self) -> f64 {
        FULL_EXTENT
    }

    fn minimized_extent(&self) -> f64 {
        MINIMIZED_EXTENT
    }

    fn apply_progress(&mut self, expansion: f64) {
        self.calls.push(HostCall::Progress(expansion));
        self.frame = PanelFrame::for_host(&*self, expansion);
    }

    fn apply_terminal(&mut self, state: LogicalState) {
        self.calls.push(HostCall::Terminal(state));
        self.frame = PanelFrame::resting_for_host(&*self, state);
    }
}

/// Tick until the controller settles, returning the settled state
pub fn run_until_settled(
    controller: &mut TransitionController,
    host: &mut RecordingHost,
) -> LogicalState {
    for _ in 0..1000 {
        if let Some(state) = controller.tick(FRAME, host) {
            return state;
        }
    }
    panic!("transition never settled");
}

/// Model with a child attached, container height 849 (full extent 800)
pub fn test_model() -> AppModel {
    let mut model = AppModel::new(849.0, PanelConfig::default());
    model
        .container
        .configure_child(Box::new(SimpleChild::new("now-playing")), false);
    model
}

/// Deliver ticks while the model asks for them, collecting every command
pub fn drain_ticks(model: &mut AppModel) -> Vec<Cmd> {
    let mut cmds = Vec::new();
    for _ in 0..1000 {
        match update(model, Msg::tick(FRAME)) {
            Some(cmd) => {
                let more = cmd.needs_tick();
                cmds.push(cmd);
                if !more {
                    return cmds;
                }
            }
            None => return cmds,
        }
    }
    panic!("model never stopped ticking");
}
