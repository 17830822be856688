//! Interactive bidirectional transition controller
//!
//! States: `Idle(Collapsed)`, `Idle(Expanded)` and `Transitioning(session)`.
//! The session is the only thing that changes between ticks; `state` moves
//! only in `settle`, which both the animator's completion and `cancel` go
//! through.

use std::time::Duration;

use super::animator::{AnimatorTick, ProgressAnimator};
use super::{
    should_reverse, DirectionIntent, GestureSample, LogicalState, TransitionSession, Velocity,
};
use crate::host::HostAdapter;

/// Duration and spring damping used for every new session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    pub duration: Duration,
    pub damping_ratio: f64,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(500),
            damping_ratio: 1.0,
        }
    }
}

/// Expand/collapse state machine for one panel
#[derive(Debug, Clone)]
pub struct TransitionController {
    state: LogicalState,
    session: Option<TransitionSession>,
    animator: ProgressAnimator,
    timing: TransitionTiming,
}

impl Default for TransitionController {
    fn default() -> Self {
        Self::new(LogicalState::Collapsed, TransitionTiming::default())
    }
}

impl TransitionController {
    pub fn new(state: LogicalState, timing: TransitionTiming) -> Self {
        Self {
            state,
            session: None,
            animator: ProgressAnimator::new(),
            timing,
        }
    }

    /// Last settled state
    pub fn state(&self) -> LogicalState {
        self.state
    }

    pub fn session(&self) -> Option<&TransitionSession> {
        self.session.as_ref()
    }

    pub fn is_transitioning(&self) -> bool {
        self.session.is_some()
    }

    /// True while a drag holds the session frozen
    pub fn is_interactive(&self) -> bool {
        self.session.is_some() && self.animator.is_paused()
    }

    /// True while the animator needs frame ticks
    pub fn is_animating(&self) -> bool {
        self.session.is_some() && self.animator.is_running()
    }

    pub fn timing(&self) -> TransitionTiming {
        self.timing
    }

    /// Takes effect for the next session
    pub fn set_timing(&mut self, timing: TransitionTiming) {
        self.timing = timing;
    }

    /// Current expansion (0 = minimized, 1 = full)
    pub fn expansion(&self) -> f64 {
        match &self.session {
            Some(session) => session.expansion(),
            None => self.state.expansion(),
        }
    }

    /// Discrete trigger (tap on the minimized strip)
    pub fn request_toggle(&mut self) -> bool {
        self.request_state(self.state.toggled())
    }

    /// Programmatic expand/collapse.
    ///
    /// Starts a full-duration transition when idle in the other state. Returns
    /// false when there is nothing to do or a session is already in flight.
    pub fn request_state(&mut self, target: LogicalState) -> bool {
        if let Some(session) = &self.session {
            if session.target_state == target {
                tracing::trace!(
                    requested = ?target,
                    "transition already in flight, reusing session"
                );
            } else {
                tracing::debug!(
                    requested = ?target,
                    in_flight = ?session.target_state,
                    "ignoring request while another transition is in flight"
                );
            }
            return false;
        }
        if self.state == target {
            tracing::trace!(requested = ?target, "already settled in requested state");
            return false;
        }

        self.start_session(target);
        true
    }

    /// Drag began: create or attach to the session and freeze it under the finger
    pub fn begin_gesture(&mut self, velocity: Velocity) {
        let expected = self.state.toggled();
        if let Some(session) = &self.session {
            if session.target_state != expected {
                tracing::warn!(
                    state = ?self.state,
                    in_flight = ?session.target_state,
                    "drag began against a session with an unexpected target, ignoring"
                );
                return;
            }
        } else {
            self.start_session(expected);
        }

        let offset = self.animator.pause();
        if let Some(session) = self.session.as_mut() {
            session.intent = DirectionIntent::from_velocity(velocity);
            session.paused_fraction_offset = offset;
            session.fraction = self.animator.progress();
            tracing::debug!(
                to = ?session.target_state,
                offset,
                upward = session.intent.is_beginning_upward,
                "drag took over transition"
            );
        }
    }

    /// Drag moved: scrub the paused session.
    ///
    /// `reference_extent` is the length of the axis a full transition spans.
    pub fn update_gesture<H: HostAdapter>(
        &mut self,
        sample: GestureSample,
        reference_extent: f64,
        host: &mut H,
    ) {
        let Some(session) = self.session.as_mut() else {
            tracing::warn!("drag update with no active transition, ignoring");
            return;
        };
        session.intent = DirectionIntent::from_velocity(sample.velocity);

        if !self.animator.is_paused() {
            tracing::warn!("drag update while transition is not paused, ignoring");
            return;
        }
        if reference_extent == 0.0
            || !reference_extent.is_finite()
            || !sample.translation.is_finite()
        {
            tracing::debug!(reference_extent, "degenerate drag sample, fraction unchanged");
            return;
        }

        let mut raw = sample.translation / reference_extent;
        if self.state == LogicalState::Collapsed {
            raw = -raw;
        }
        if self.animator.is_reversed() {
            raw = -raw;
        }

        self.animator
            .set_fraction_complete(session.paused_fraction_offset + raw);
        session.fraction = self.animator.progress();
        host.apply_progress(session.expansion());
    }

    /// Drag released: decide direction and let the animator finish the job
    pub fn end_gesture(&mut self) {
        let Some(session) = self.session.as_mut() else {
            tracing::warn!("drag ended with no active transition, ignoring");
            return;
        };
        if !self.animator.is_paused() {
            tracing::debug!("drag ended on a transition that is already running, ignoring");
            return;
        }

        let reversed = should_reverse(self.state, session.intent.is_beginning_upward);
        session.reversed = reversed;
        self.animator.set_reversed(reversed);
        self.animator.resume(0.0);
        tracing::debug!(
            state = ?self.state,
            to = ?session.target_state,
            reversed,
            fraction = session.fraction,
            "drag released"
        );
    }

    /// Terminate immediately at the nearest terminal fraction.
    ///
    /// Idle controllers are left alone. Returns the settled state otherwise.
    pub fn cancel<H: HostAdapter>(&mut self, host: &mut H) -> Option<LogicalState> {
        let session = self.session.as_ref()?;
        let settled = session.nearest_state();
        self.animator.stop();
        tracing::debug!(?settled, fraction = session.fraction, "transition cancelled");
        Some(self.settle(settled, host))
    }

    /// Advance the animator by one frame and apply the result to the host.
    ///
    /// Returns the new state when the transition settles on this tick.
    pub fn tick<H: HostAdapter>(&mut self, dt: Duration, host: &mut H) -> Option<LogicalState> {
        let session = self.session.as_mut()?;
        match self.animator.advance(dt) {
            AnimatorTick::Idle => None,
            AnimatorTick::Progress(progress) => {
                session.fraction = progress;
                host.apply_progress(session.expansion());
                None
            }
            AnimatorTick::Finished(terminal) => {
                session.fraction = terminal;
                let settled = if terminal >= 1.0 {
                    session.target_state
                } else {
                    self.state
                };
                Some(self.settle(settled, host))
            }
        }
    }

    fn start_session(&mut self, target: LogicalState) {
        self.animator
            .start(self.timing.duration, self.timing.damping_ratio);
        self.session = Some(TransitionSession::new(target));
        tracing::debug!(from = ?self.state, to = ?target, "transition started");
    }

    fn settle<H: HostAdapter>(&mut self, state: LogicalState, host: &mut H) -> LogicalState {
        self.state = state;
        self.session = None;
        host.apply_terminal(state);
        tracing::debug!(?state, "transition settled");
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::PanelHost;

    const FRAME: Duration = Duration::from_millis(16);

    fn host() -> PanelHost {
        PanelHost::new(800.0, 50.0)
    }

    fn settle_all(controller: &mut TransitionController, host: &mut PanelHost) -> LogicalState {
        for _ in 0..500 {
            if let Some(state) = controller.tick(FRAME, host) {
                return state;
            }
        }
        panic!("transition never settled");
    }

    #[test]
    fn test_toggle_expands() {
        let mut controller = TransitionController::default();
        let mut host = host();
        assert!(controller.request_toggle());
        assert!(controller.is_animating());
        assert_eq!(settle_all(&mut controller, &mut host), LogicalState::Expanded);
        assert_eq!(controller.state(), LogicalState::Expanded);
        assert!(controller.session().is_none());
        assert_eq!(host.frame().extent, 800.0);
    }

    #[test]
    fn test_second_toggle_is_ignored() {
        let mut controller = TransitionController::default();
        assert!(controller.request_toggle());
        assert!(!controller.request_toggle());
        assert!(!controller.request_state(LogicalState::Collapsed));
    }

    #[test]
    fn test_request_current_state_is_noop() {
        let mut controller = TransitionController::default();
        assert!(!controller.request_state(LogicalState::Collapsed));
        assert!(!controller.is_transitioning());
    }

    #[test]
    fn test_begin_gesture_pauses_at_zero() {
        let mut controller = TransitionController::default();
        controller.begin_gesture(Velocity(-10.0));
        let session = controller.session().unwrap();
        assert_eq!(session.target_state, LogicalState::Expanded);
        assert_eq!(session.paused_fraction_offset, 0.0);
        assert!(controller.is_interactive());

        // Paused sessions don't move on ticks
        let mut host = host();
        assert_eq!(controller.tick(FRAME, &mut host), None);
        assert_eq!(controller.session().unwrap().fraction, 0.0);
    }

    #[test]
    fn test_drag_up_from_collapsed_expands() {
        let mut controller = TransitionController::default();
        let mut host = host();
        controller.begin_gesture(Velocity(-10.0));
        controller.update_gesture(GestureSample::new(-200.0, -300.0), 800.0, &mut host);
        assert_eq!(controller.session().unwrap().fraction, 0.25);
        assert_eq!(host.frame().extent, 50.0 + 0.25 * 750.0);

        controller.end_gesture();
        assert!(!controller.session().unwrap().reversed);
        assert_eq!(settle_all(&mut controller, &mut host), LogicalState::Expanded);
    }

    #[test]
    fn test_update_without_session_is_ignored() {
        let mut controller = TransitionController::default();
        let mut host = host();
        controller.update_gesture(GestureSample::new(-200.0, -1.0), 800.0, &mut host);
        controller.end_gesture();
        assert!(!controller.is_transitioning());
        assert_eq!(host.layout_passes(), 0);
    }

    #[test]
    fn test_cancel_when_idle_is_noop() {
        let mut controller = TransitionController::default();
        let mut host = host();
        assert_eq!(controller.cancel(&mut host), None);
        assert_eq!(host.layout_passes(), 0);
    }

    #[test]
    fn test_regrab_reversed_session_keeps_finger_direction() {
        let mut controller = TransitionController::default();
        let mut host = host();

        // Drag up halfway, release moving down: reverses toward Collapsed
        controller.begin_gesture(Velocity(-10.0));
        controller.update_gesture(GestureSample::new(-400.0, 10.0), 800.0, &mut host);
        controller.end_gesture();
        assert!(controller.session().unwrap().reversed);
        controller.tick(Duration::from_millis(50), &mut host);
        let before = controller.expansion();

        // Grab again and push further up: panel must grow
        controller.begin_gesture(Velocity(-10.0));
        controller.update_gesture(GestureSample::new(-80.0, -10.0), 800.0, &mut host);
        assert!(controller.expansion() > before);
    }
}
