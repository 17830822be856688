//! Host side of the transition: measured extents in, visual state out
//!
//! The controller never touches layout directly. Every tick it hands an
//! expansion value to a `HostAdapter`, and once per transition it asks the
//! host to snap to a resting state.

use crate::transition::LogicalState;

/// Contract between the transition controller and whatever lays the panel out
///
/// The controller only calls `apply_progress` and `apply_terminal`; the two
/// extents feed `PanelFrame::for_host` and `PanelFrame::resting_for_host`.
/// Drags are normalized by the container height, not by these extents.
pub trait HostAdapter {
    /// Extent of the panel when expanded
    fn full_extent(&self) -> f64;

    /// Extent of the minimized strip
    fn minimized_extent(&self) -> f64;

    /// Apply an interpolated expansion (0 = minimized, 1 = full) and lay out
    fn apply_progress(&mut self, expansion: f64);

    /// Snap exactly to a resting state
    fn apply_terminal(&mut self, state: LogicalState);
}

/// Visual properties the transition drives
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    /// Panel extent along the transition axis
    pub extent: f64,
    /// Opacity of the minimized strip overlay
    pub overlay_opacity: f64,
}

impl PanelFrame {
    /// Linear mapping from expansion to extent and overlay opacity
    pub fn interpolate(minimized: f64, full: f64, expansion: f64) -> Self {
        let t = expansion.clamp(0.0, 1.0);
        Self {
            extent: minimized + t * (full - minimized),
            overlay_opacity: 1.0 - t,
        }
    }

    /// Interpolated frame between the host's own extents
    pub fn for_host<H: HostAdapter + ?Sized>(host: &H, expansion: f64) -> Self {
        Self::interpolate(host.minimized_extent(), host.full_extent(), expansion)
    }

    /// Resting frame at the host's own extents
    pub fn resting_for_host<H: HostAdapter + ?Sized>(host: &H, state: LogicalState) -> Self {
        Self::resting(host.minimized_extent(), host.full_extent(), state)
    }

    /// Exact frame for a resting state
    pub fn resting(minimized: f64, full: f64, state: LogicalState) -> Self {
        match state {
            LogicalState::Collapsed => Self {
                extent: minimized,
                overlay_opacity: 1.0,
            },
            LogicalState::Expanded => Self {
                extent: full,
                overlay_opacity: 0.0,
            },
        }
    }
}

/// Host that keeps the panel's frame as plain values.
///
/// Used by the container and the replay tool; a UI toolkit would write the
/// same numbers into its layout constraints instead.
#[derive(Debug, Clone)]
pub struct PanelHost {
    full_extent: f64,
    minimized_extent: f64,
    frame: PanelFrame,
    layout_passes: usize,
}

impl PanelHost {
    /// Starts collapsed
    pub fn new(full_extent: f64, minimized_extent: f64) -> Self {
        Self {
            full_extent,
            minimized_extent,
            frame: PanelFrame::resting(minimized_extent, full_extent, LogicalState::Collapsed),
            layout_passes: 0,
        }
    }

    pub fn frame(&self) -> PanelFrame {
        self.frame
    }

    /// Number of layout passes performed so far
    pub fn layout_passes(&self) -> usize {
        self.layout_passes
    }

    /// New full extent after the container was resized
    pub fn set_full_extent(&mut self, full_extent: f64) {
        self.full_extent = full_extent;
    }

    /// Drive the extent directly (dismissal), leaving the overlay as it is
    pub fn set_extent(&mut self, extent: f64) {
        self.frame.extent = extent.max(0.0);
        self.layout_passes += 1;
    }
}

impl HostAdapter for PanelHost {
    fn full_extent(&self) -> f64 {
        self.full_extent
    }

    fn minimized_extent(&self) -> f64 {
        self.minimized_extent
    }

    fn apply_progress(&mut self, expansion: f64) {
        self.frame = PanelFrame::for_host(&*self, expansion);
        self.layout_passes += 1;
    }

    fn apply_terminal(&mut self, state: LogicalState) {
        self.frame = PanelFrame::resting_for_host(&*self, state);
        self.layout_passes += 1;
    }
}
