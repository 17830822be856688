//! Expand/collapse transition core
//!
//! Drives the sticky panel between its minimized strip and full-screen
//! extent. Discrete triggers (tap, programmatic expand/collapse) run a
//! transition unattended; continuous triggers (drag) pause it and scrub the
//! fraction directly, then hand it back to the animator on release.
//!
//! ## Architecture
//!
//! - `LogicalState`: resting state of the panel (Collapsed or Expanded)
//! - `TransitionSession`: the single in-flight transition, if any
//! - `ProgressAnimator`: time-driven fraction engine with pause/scrub/reverse
//! - `TransitionController`: state machine tying the above together
//! - `HostAdapter` (in `crate::host`): applies fractions to visual properties

mod animator;
mod controller;

pub use animator::{AnimatorTick, ProgressAnimator, SpringCurve};
pub use controller::{TransitionController, TransitionTiming};

use serde::{Deserialize, Serialize};

/// Resting state of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalState {
    /// Minimized strip above the tab bar
    #[default]
    Collapsed,
    /// Full extent, covering the content area
    Expanded,
}

impl LogicalState {
    /// The state a transition from `self` heads toward
    pub fn toggled(self) -> LogicalState {
        match self {
            LogicalState::Collapsed => LogicalState::Expanded,
            LogicalState::Expanded => LogicalState::Collapsed,
        }
    }

    /// Expansion value (0 = minimized, 1 = full) of this resting state
    pub fn expansion(self) -> f64 {
        match self {
            LogicalState::Collapsed => 0.0,
            LogicalState::Expanded => 1.0,
        }
    }
}

/// Instantaneous gesture velocity along the transition axis.
///
/// The axis follows the input layer's vertical coordinate, so positive values
/// point toward the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity(pub f64);

impl Velocity {
    /// Direction predicate fed into the reversal table.
    ///
    /// "Upward" is the recognizer's positive axis, which is the direction
    /// that moves an expanded panel toward collapse.
    pub fn is_upward(self) -> bool {
        self.0 > 0.0
    }
}

/// One drag event: translation since drag start plus current velocity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureSample {
    /// Accumulated translation along the transition axis since drag began
    pub translation: f64,
    pub velocity: Velocity,
}

impl GestureSample {
    pub fn new(translation: f64, velocity: f64) -> Self {
        Self {
            translation,
            velocity: Velocity(velocity),
        }
    }
}

/// Direction the drag is currently heading, re-sampled on every event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionIntent {
    pub is_beginning_upward: bool,
}

impl DirectionIntent {
    pub fn from_velocity(velocity: Velocity) -> Self {
        Self {
            is_beginning_upward: velocity.is_upward(),
        }
    }
}

/// Whether releasing a drag should send the transition back to where it came from.
///
/// | state     | upward | reversed |
/// |-----------|--------|----------|
/// | Expanded  | true   | false    |
/// | Expanded  | false  | true     |
/// | Collapsed | true   | true     |
/// | Collapsed | false  | false    |
pub fn should_reverse(current: LogicalState, is_beginning_upward: bool) -> bool {
    match current {
        LogicalState::Expanded => !is_beginning_upward,
        LogicalState::Collapsed => is_beginning_upward,
    }
}

/// The single in-flight transition.
///
/// Created by any trigger and dropped exactly once, when the animator settles
/// or the transition is cancelled.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionSession {
    /// State being transitioned to
    pub target_state: LogicalState,
    /// Progress from the origin state (0) toward `target_state` (1)
    pub fraction: f64,
    /// Continuing the session drives `fraction` toward 0
    pub reversed: bool,
    /// Animator fraction captured when a drag took over the session
    pub paused_fraction_offset: f64,
    /// Latest direction sampled from the drag
    pub intent: DirectionIntent,
}

impl TransitionSession {
    pub fn new(target_state: LogicalState) -> Self {
        Self {
            target_state,
            fraction: 0.0,
            reversed: false,
            paused_fraction_offset: 0.0,
            intent: DirectionIntent::default(),
        }
    }

    /// Expansion value for the current fraction
    pub fn expansion(&self) -> f64 {
        match self.target_state {
            LogicalState::Expanded => self.fraction,
            LogicalState::Collapsed => 1.0 - self.fraction,
        }
    }

    /// Terminal state closest to the current fraction
    pub fn nearest_state(&self) -> LogicalState {
        if self.fraction >= 0.5 {
            self.target_state
        } else {
            self.target_state.toggled()
        }
    }
}
