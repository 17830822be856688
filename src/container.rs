//! Sticky container - the tab-bar side of the expandable panel
//!
//! A container hosts at most one expandable child above its tab bar. The
//! child is wrapped in an `ExpandablePanel`, which pairs it with its own
//! transition controller and host. The container forwards expand/collapse
//! requests and handles removal, including the animated shrink to zero.
//!
//! ## Capabilities
//!
//! - `Expandable`: implemented by anything that can live in the panel
//! - `StickyContainer`: implemented by anything that can host the panel
//! - `PanelContext` + `container_for()`: how a child finds its container

use std::time::Duration;

use crate::config::PanelConfig;
use crate::host::{HostAdapter, PanelFrame, PanelHost};
use crate::transition::{
    AnimatorTick, GestureSample, LogicalState, ProgressAnimator, TransitionController,
    TransitionTiming, Velocity,
};

/// A child that can be presented in the sticky panel
pub trait Expandable: std::fmt::Debug {
    /// Identifier of the minimized strip that receives taps
    fn minimised_view(&self) -> &str;

    /// Called once when a container adopts the child
    fn did_attach(&mut self) {}
}

/// Something that can host an expandable child above its tab bar
pub trait StickyContainer {
    fn collapsed_extent(&self) -> f64;

    /// Applies to the next configured child
    fn set_collapsed_extent(&mut self, extent: f64);

    fn transition_duration(&self) -> Duration;

    /// Applies to the next configured child
    fn set_transition_duration(&mut self, duration: Duration);

    fn child(&self) -> Option<&dyn Expandable>;

    /// Wrap and attach `child`. Ignored (returns false) if a child is already attached.
    fn configure_child(
        &mut self,
        child: Box<dyn Expandable>,
        full_screen_on_first_appearance: bool,
    ) -> bool;

    /// Detach the child, optionally shrinking it to zero first
    fn remove_child(&mut self, animated: bool);

    fn collapse_child(&mut self);

    fn expand_child(&mut self);
}

/// Anything that may own a sticky container (usually the app model)
pub trait PanelContext {
    fn sticky_container(&mut self) -> Option<&mut dyn StickyContainer>;
}

/// Look up the container a child lives in, if the context has one
pub fn container_for<C: PanelContext + ?Sized>(ctx: &mut C) -> Option<&mut dyn StickyContainer> {
    ctx.sticky_container()
}

/// Plain child identified only by its minimized strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleChild {
    minimised_view: String,
    attached: bool,
}

impl SimpleChild {
    pub fn new(minimised_view: impl Into<String>) -> Self {
        Self {
            minimised_view: minimised_view.into(),
            attached: false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Expandable for SimpleChild {
    fn minimised_view(&self) -> &str {
        &self.minimised_view
    }

    fn did_attach(&mut self) {
        self.attached = true;
    }
}

/// A child together with the controller and host that animate it
#[derive(Debug)]
pub struct ExpandablePanel {
    child: Box<dyn Expandable>,
    controller: TransitionController,
    host: PanelHost,
}

impl ExpandablePanel {
    pub fn new(child: Box<dyn Expandable>, timing: TransitionTiming, host: PanelHost) -> Self {
        Self {
            child,
            controller: TransitionController::new(LogicalState::Collapsed, timing),
            host,
        }
    }

    pub fn child(&self) -> &dyn Expandable {
        self.child.as_ref()
    }

    pub fn controller(&self) -> &TransitionController {
        &self.controller
    }

    pub fn host(&self) -> &PanelHost {
        &self.host
    }

    pub fn state(&self) -> LogicalState {
        self.controller.state()
    }

    pub fn frame(&self) -> PanelFrame {
        self.host.frame()
    }

    /// Tap on the minimized strip
    pub fn tap_ended(&mut self) -> bool {
        self.controller.request_toggle()
    }

    pub fn drag_began(&mut self, velocity: Velocity) {
        self.controller.begin_gesture(velocity);
    }

    pub fn drag_changed(&mut self, sample: GestureSample, reference_extent: f64) {
        self.controller
            .update_gesture(sample, reference_extent, &mut self.host);
    }

    pub fn drag_ended(&mut self) {
        self.controller.end_gesture();
    }

    pub fn expand(&mut self) -> bool {
        self.controller.request_state(LogicalState::Expanded)
    }

    pub fn collapse(&mut self) -> bool {
        self.controller.request_state(LogicalState::Collapsed)
    }

    pub fn cancel(&mut self) -> Option<LogicalState> {
        self.controller.cancel(&mut self.host)
    }

    pub fn tick(&mut self, dt: Duration) -> Option<LogicalState> {
        self.controller.tick(dt, &mut self.host)
    }

    fn resize(&mut self, full_extent: f64) {
        self.host.set_full_extent(full_extent);
        if !self.controller.is_transitioning() {
            let state = self.controller.state();
            self.host.apply_terminal(state);
        }
    }
}

/// Animated shrink to zero before the child is detached
#[derive(Debug, Clone)]
struct Dismissal {
    animator: ProgressAnimator,
    from_extent: f64,
}

/// What happened during one container tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContainerTick {
    /// The panel's transition settled in this state
    pub settled: Option<LogicalState>,
    /// The child was detached at the end of an animated removal
    pub removed: bool,
}

/// Tab-bar container hosting at most one expandable panel
#[derive(Debug)]
pub struct TabBarContainer {
    collapsed_extent: f64,
    transition_duration: Duration,
    damping_ratio: f64,
    height: f64,
    tab_bar_height: f64,
    panel: Option<ExpandablePanel>,
    pending_expand: bool,
    dismissal: Option<Dismissal>,
}

impl TabBarContainer {
    /// Container of the given total height, configured from `config`
    pub fn new(height: f64, config: &PanelConfig) -> Self {
        Self {
            collapsed_extent: config.collapsed_extent,
            transition_duration: config.transition_duration(),
            damping_ratio: config.damping_ratio,
            height: height.max(0.0),
            tab_bar_height: config.tab_bar_height,
            panel: None,
            pending_expand: false,
            dismissal: None,
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Extent of an expanded panel: everything above the tab bar
    pub fn full_extent(&self) -> f64 {
        (self.height - self.tab_bar_height).max(0.0)
    }

    pub fn panel(&self) -> Option<&ExpandablePanel> {
        self.panel.as_ref()
    }

    /// The panel, unless it is being dismissed and no longer takes input
    pub fn panel_mut(&mut self) -> Option<&mut ExpandablePanel> {
        if self.dismissal.is_some() {
            return None;
        }
        self.panel.as_mut()
    }

    pub fn is_dismissing(&self) -> bool {
        self.dismissal.is_some()
    }

    /// Whether the host loop should keep delivering ticks
    pub fn needs_tick(&self) -> bool {
        self.pending_expand
            || self.dismissal.is_some()
            || self
                .panel
                .as_ref()
                .is_some_and(|panel| panel.controller().is_animating())
    }

    /// New container height; a resting panel re-snaps to the new full extent
    pub fn resize(&mut self, height: f64) {
        self.height = height.max(0.0);
        let full_extent = self.full_extent();
        if self.dismissal.is_none() {
            if let Some(panel) = self.panel.as_mut() {
                panel.resize(full_extent);
            }
        }
        tracing::debug!(height = self.height, full_extent, "container resized");
    }

    /// Advance whatever is animating by one frame
    pub fn tick(&mut self, dt: Duration) -> ContainerTick {
        let mut outcome = ContainerTick::default();

        if self.pending_expand {
            self.pending_expand = false;
            self.expand_child();
        }

        if let Some(dismissal) = self.dismissal.as_mut() {
            let Some(panel) = self.panel.as_mut() else {
                self.dismissal = None;
                return outcome;
            };
            match dismissal.animator.advance(dt) {
                AnimatorTick::Idle => {}
                AnimatorTick::Progress(progress) => {
                    panel.host.set_extent(dismissal.from_extent * (1.0 - progress));
                }
                AnimatorTick::Finished(_) => {
                    panel.host.set_extent(0.0);
                    self.detach();
                    outcome.removed = true;
                }
            }
            return outcome;
        }

        if let Some(panel) = self.panel.as_mut() {
            outcome.settled = panel.tick(dt);
        }
        outcome
    }

    fn timing(&self) -> TransitionTiming {
        TransitionTiming {
            duration: self.transition_duration,
            damping_ratio: self.damping_ratio,
        }
    }

    fn detach(&mut self) {
        self.panel = None;
        self.dismissal = None;
        self.pending_expand = false;
        tracing::info!("sticky child removed");
    }
}

impl StickyContainer for TabBarContainer {
    fn collapsed_extent(&self) -> f64 {
        self.collapsed_extent
    }

    fn set_collapsed_extent(&mut self, extent: f64) {
        self.collapsed_extent = extent.max(0.0);
    }

    fn transition_duration(&self) -> Duration {
        self.transition_duration
    }

    fn set_transition_duration(&mut self, duration: Duration) {
        self.transition_duration = duration;
    }

    fn child(&self) -> Option<&dyn Expandable> {
        self.panel.as_ref().map(|panel| panel.child())
    }

    fn configure_child(
        &mut self,
        mut child: Box<dyn Expandable>,
        full_screen_on_first_appearance: bool,
    ) -> bool {
        if self.panel.is_some() {
            tracing::warn!(
                minimised_view = child.minimised_view(),
                "container already hosts a child, ignoring"
            );
            return false;
        }

        child.did_attach();
        tracing::info!(
            minimised_view = child.minimised_view(),
            full_screen_on_first_appearance,
            "sticky child configured"
        );
        let host = PanelHost::new(self.full_extent(), self.collapsed_extent);
        self.panel = Some(ExpandablePanel::new(child, self.timing(), host));
        self.pending_expand = full_screen_on_first_appearance;
        true
    }

    fn remove_child(&mut self, animated: bool) {
        let Some(panel) = self.panel.as_mut() else {
            return;
        };
        if !animated {
            panel.cancel();
            self.detach();
            return;
        }
        if self.dismissal.is_some() {
            return;
        }

        panel.cancel();
        let mut animator = ProgressAnimator::new();
        animator.start(self.transition_duration, self.damping_ratio);
        self.dismissal = Some(Dismissal {
            animator,
            from_extent: panel.frame().extent,
        });
        self.pending_expand = false;
        tracing::debug!("sticky child dismissal started");
    }

    fn collapse_child(&mut self) {
        if let Some(panel) = self.panel_mut() {
            panel.collapse();
        }
    }

    fn expand_child(&mut self) {
        if let Some(panel) = self.panel_mut() {
            panel.expand();
        }
    }
}
