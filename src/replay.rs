//! Scripted replay of panel input
//!
//! A replay script is a YAML document listing input events. Each event is fed
//! through `update`, and `wait` entries advance a fixed-step frame clock so
//! animations play out exactly as a host event loop would drive them.
//!
//! ```yaml
//! height: 849
//! child: now-playing
//! frame_ms: 16
//! events:
//!   - event: tap
//!   - event: wait
//!     ms: 600
//!   - event: drag_begin
//!     velocity: 120
//!   - event: drag_change
//!     translation: 300
//!     velocity: 240
//!   - event: drag_end
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::commands::Cmd;
use crate::config::PanelConfig;
use crate::container::{SimpleChild, StickyContainer};
use crate::messages::{ContainerMsg, Msg, PanelMsg};
use crate::model::AppModel;
use crate::transition::LogicalState;
use crate::update::update;

/// Upper bound on frames played for a single `wait` or after the last event
const MAX_DRAIN_FRAMES: usize = 10_000;

/// One scripted input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Tap,
    DragBegin {
        velocity: f64,
    },
    DragChange {
        translation: f64,
        velocity: f64,
    },
    DragEnd,
    Cancel,
    Collapse,
    Expand,
    Dismiss {
        #[serde(default)]
        animated: bool,
    },
    Resize {
        height: f64,
    },
    /// Let the frame clock run
    Wait {
        ms: u64,
    },
}

impl ScriptEvent {
    /// Short label used in replay output
    pub fn label(&self) -> &'static str {
        match self {
            ScriptEvent::Tap => "tap",
            ScriptEvent::DragBegin { .. } => "drag_begin",
            ScriptEvent::DragChange { .. } => "drag_change",
            ScriptEvent::DragEnd => "drag_end",
            ScriptEvent::Cancel => "cancel",
            ScriptEvent::Collapse => "collapse",
            ScriptEvent::Expand => "expand",
            ScriptEvent::Dismiss { .. } => "dismiss",
            ScriptEvent::Resize { .. } => "resize",
            ScriptEvent::Wait { .. } => "wait",
        }
    }

    /// Message for this event; `Wait` is handled by the clock instead
    pub fn to_msg(self) -> Option<Msg> {
        let msg = match self {
            ScriptEvent::Tap => Msg::tap(),
            ScriptEvent::DragBegin { velocity } => Msg::drag_began(velocity),
            ScriptEvent::DragChange {
                translation,
                velocity,
            } => Msg::drag_changed(translation, velocity),
            ScriptEvent::DragEnd => Msg::drag_ended(),
            ScriptEvent::Cancel => Msg::Panel(PanelMsg::Cancel),
            ScriptEvent::Collapse => Msg::Container(ContainerMsg::Collapse),
            ScriptEvent::Expand => Msg::Container(ContainerMsg::Expand),
            ScriptEvent::Dismiss { animated } => {
                Msg::Container(ContainerMsg::Dismiss { animated })
            }
            ScriptEvent::Resize { height } => Msg::Container(ContainerMsg::Resize { height }),
            ScriptEvent::Wait { .. } => return None,
        };
        Some(msg)
    }
}

/// A complete replay script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Container height
    #[serde(default = "default_height")]
    pub height: f64,

    /// Minimized strip identifier of the child to attach
    #[serde(default = "default_child")]
    pub child: String,

    /// Expand the child right after attaching it
    #[serde(default)]
    pub full_screen_on_first_appearance: bool,

    /// Frame step of the replay clock
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,

    pub events: Vec<ScriptEvent>,
}

fn default_height() -> f64 {
    849.0
}

fn default_child() -> String {
    "now-playing".to_string()
}

fn default_frame_ms() -> u64 {
    16
}

impl ReplayScript {
    /// Parse a script from YAML
    pub fn parse(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse replay script: {}", e))
    }

    fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }
}

/// Panel state after one update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRecord {
    /// Replay clock when the update ran
    pub time_ms: u64,
    /// Event label, or "tick" for frame ticks
    pub input: &'static str,
    /// Resting state of the child (None once removed)
    pub state: Option<LogicalState>,
    pub extent: Option<f64>,
    pub overlay_opacity: Option<f64>,
    /// State the transition settled in during this update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled: Option<LogicalState>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub removed: bool,
}

impl FrameRecord {
    fn capture(model: &AppModel, time_ms: u64, input: &'static str, cmd: Option<&Cmd>) -> Self {
        let frame = model.panel_frame();
        Self {
            time_ms,
            input,
            state: model.panel_state(),
            extent: frame.map(|f| f.extent),
            overlay_opacity: frame.map(|f| f.overlay_opacity),
            settled: cmd.and_then(|c| c.settled_states().first().copied()),
            removed: cmd.is_some_and(|c| c.removes_child()),
        }
    }

    /// Something other than interpolation happened in this update
    pub fn is_notable(&self) -> bool {
        self.input != "tick" || self.settled.is_some() || self.removed
    }

    /// Human-readable single line
    pub fn to_text(&self) -> String {
        let state = self
            .state
            .map(|s| format!("{:?}", s))
            .unwrap_or_else(|| "-".to_string());
        let mut line = match (self.extent, self.overlay_opacity) {
            (Some(extent), Some(opacity)) => format!(
                "{:>7}ms {:<12} {:<10} extent={:>8.2} overlay={:.3}",
                self.time_ms, self.input, state, extent, opacity
            ),
            _ => format!("{:>7}ms {:<12} {:<10}", self.time_ms, self.input, state),
        };
        if let Some(settled) = self.settled {
            line.push_str(&format!(" settled={:?}", settled));
        }
        if self.removed {
            line.push_str(" removed");
        }
        line
    }
}

/// Everything a replay produced
#[derive(Debug, Clone, Default)]
pub struct ReplayReport {
    pub frames: Vec<FrameRecord>,
    /// Every settle, in order
    pub settled: Vec<LogicalState>,
    pub removed: bool,
    /// Resting state of the child at the end, if still attached
    pub final_state: Option<LogicalState>,
}

struct Replayer {
    model: AppModel,
    frame: Duration,
    clock: Duration,
    report: ReplayReport,
}

impl Replayer {
    fn dispatch(&mut self, msg: Msg, input: &'static str) {
        let cmd = update(&mut self.model, msg);
        let record = FrameRecord::capture(
            &self.model,
            self.clock.as_millis() as u64,
            input,
            cmd.as_ref(),
        );
        if let Some(cmd) = &cmd {
            self.report.settled.extend(cmd.settled_states());
            self.report.removed |= cmd.removes_child();
        }
        self.report.frames.push(record);
    }

    fn tick(&mut self) {
        self.clock += self.frame;
        self.dispatch(Msg::tick(self.frame), "tick");
    }

    fn wait(&mut self, duration: Duration) {
        let requested = duration.as_nanos().div_ceil(self.frame.as_nanos());
        let frames = usize::try_from(requested)
            .unwrap_or(usize::MAX)
            .min(MAX_DRAIN_FRAMES);
        if (frames as u128) < requested {
            tracing::warn!(
                requested = %requested,
                played = frames,
                "wait truncated to the replay frame budget"
            );
        }
        for _ in 0..frames {
            self.tick();
        }
    }
}

/// Run `script` against a fresh model built from `config`
pub fn replay(script: &ReplayScript, config: PanelConfig) -> ReplayReport {
    let full_screen =
        script.full_screen_on_first_appearance || config.full_screen_on_first_appearance;
    let mut model = AppModel::new(script.height, config);
    model
        .container
        .configure_child(Box::new(SimpleChild::new(script.child.clone())), full_screen);

    let mut replayer = Replayer {
        model,
        frame: script.frame(),
        clock: Duration::ZERO,
        report: ReplayReport::default(),
    };

    for event in &script.events {
        match event {
            ScriptEvent::Wait { ms } => replayer.wait(Duration::from_millis(*ms)),
            other => {
                if let Some(msg) = other.to_msg() {
                    replayer.dispatch(msg, other.label());
                }
            }
        }
    }

    let mut drained = 0;
    while replayer.model.container.needs_tick() && drained < MAX_DRAIN_FRAMES {
        replayer.tick();
        drained += 1;
    }
    if drained == MAX_DRAIN_FRAMES {
        tracing::warn!("replay stopped after {} trailing frames", MAX_DRAIN_FRAMES);
    }

    let mut report = replayer.report;
    report.final_state = replayer.model.panel_state();
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = ReplayScript::parse(
            "events:\n  - event: tap\n  - event: wait\n    ms: 100\n  - event: dismiss\n",
        )
        .unwrap();
        assert_eq!(script.height, 849.0);
        assert_eq!(script.frame_ms, 16);
        assert_eq!(
            script.events,
            vec![
                ScriptEvent::Tap,
                ScriptEvent::Wait { ms: 100 },
                ScriptEvent::Dismiss { animated: false },
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_event() {
        let err = ReplayScript::parse("events:\n  - event: swipe\n").unwrap_err();
        assert!(err.contains("Failed to parse replay script"));
    }

    #[test]
    fn test_tap_drains_to_expanded() {
        let script = ReplayScript::parse("events:\n  - event: tap\n").unwrap();
        let report = replay(&script, PanelConfig::default());
        assert_eq!(report.settled, vec![LogicalState::Expanded]);
        assert_eq!(report.final_state, Some(LogicalState::Expanded));
        assert_eq!(report.frames.last().unwrap().extent, Some(800.0));
    }

    #[test]
    fn test_wait_respects_frame_budget() {
        let script =
            ReplayScript::parse("events:\n  - event: wait\n    ms: 18446744073709551615\n")
                .unwrap();
        let report = replay(&script, PanelConfig::default());
        assert_eq!(report.frames.len(), MAX_DRAIN_FRAMES);
        assert_eq!(report.final_state, Some(LogicalState::Collapsed));
    }

    #[test]
    fn test_wait_plays_whole_frames() {
        let script = ReplayScript::parse("events:\n  - event: wait\n    ms: 40\n").unwrap();
        let report = replay(&script, PanelConfig::default());
        // ceil(40 / 16)
        assert_eq!(report.frames.len(), 3);
        assert_eq!(report.frames.last().unwrap().time_ms, 48);
    }

    #[test]
    fn test_text_line() {
        let record = FrameRecord {
            time_ms: 32,
            input: "tick",
            state: Some(LogicalState::Collapsed),
            extent: Some(50.0),
            overlay_opacity: Some(1.0),
            settled: Some(LogicalState::Collapsed),
            removed: false,
        };
        let line = record.to_text();
        assert!(line.contains("extent=   50.00"));
        assert!(line.ends_with("settled=Collapsed"));
        assert!(record.is_notable());
    }
}
