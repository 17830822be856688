//! Message types for the Elm-style architecture
//!
//! All input reaching the sticky panel flows through these message types.

use std::time::Duration;

use crate::transition::{GestureSample, Velocity};

/// Input events delivered by the panel's gesture recognizers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelMsg {
    /// Tap released on the minimized strip
    TapEnded,
    /// Drag recognized, with the velocity of the first sample
    DragBegan { velocity: Velocity },
    /// Drag moved (translation is cumulative since the drag began)
    DragChanged(GestureSample),
    /// Finger lifted
    DragEnded,
    /// Force the in-flight transition to its nearest resting state
    Cancel,
}

/// Requests from the container's owner and the host event loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContainerMsg {
    /// Programmatic collapse of the hosted child
    Collapse,
    /// Programmatic expand of the hosted child
    Expand,
    /// Remove the hosted child, optionally animating it away
    Dismiss { animated: bool },
    /// Container height changed
    Resize { height: f64 },
    /// One animation frame elapsed
    Tick(Duration),
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    /// Gesture input on the panel
    Panel(PanelMsg),
    /// Container requests and frame ticks
    Container(ContainerMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn tap() -> Self {
        Msg::Panel(PanelMsg::TapEnded)
    }

    pub fn drag_began(velocity: f64) -> Self {
        Msg::Panel(PanelMsg::DragBegan {
            velocity: Velocity(velocity),
        })
    }

    pub fn drag_changed(translation: f64, velocity: f64) -> Self {
        Msg::Panel(PanelMsg::DragChanged(GestureSample::new(translation, velocity)))
    }

    pub fn drag_ended() -> Self {
        Msg::Panel(PanelMsg::DragEnded)
    }

    pub fn tick(dt: Duration) -> Self {
        Msg::Container(ContainerMsg::Tick(dt))
    }
}
