//! Progress animator - a pausable, scrubbable, reversible fraction engine
//!
//! The animator owns a single `progress` value in [0, 1] measured from the
//! start of the animation toward its end. While running it is advanced by
//! `advance(dt)` calls from the host's frame loop and follows a damped spring
//! curve. While paused it only moves through `set_fraction_complete`.
//!
//! `fraction_complete` is reported along the current direction of travel:
//! once reversed, a fraction of 0.2 means 20% of the way back to the start.

use std::time::Duration;

/// Settling time multiplier for critically damped springs.
///
/// Solving e^(-ω₀T)(1 + ω₀T) = 0.01 gives ω₀ ≈ 6.6 / T, so the curve is within
/// 1% of its target at the end of the segment.
const CRITICALLY_DAMPED_SETTLE_FACTOR: f64 = 6.6;

/// Spring timing curve evaluated over normalized time.
///
/// Uses the analytical solution of x'' + 2ζω₀x' + ω₀²x = ω₀² with x(0) = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringCurve {
    damping_ratio: f64,
}

impl Default for SpringCurve {
    fn default() -> Self {
        Self { damping_ratio: 1.0 }
    }
}

impl SpringCurve {
    /// Non-positive or non-finite ratios fall back to critical damping
    pub fn new(damping_ratio: f64) -> Self {
        let damping_ratio = if damping_ratio.is_finite() && damping_ratio > 0.0 {
            damping_ratio
        } else {
            1.0
        };
        Self { damping_ratio }
    }

    /// Curve position at normalized time `t` (0 = segment start, 1 = segment end).
    ///
    /// Underdamped curves overshoot past 1.0; callers clamp.
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        let zeta = self.damping_ratio;
        let omega_0 = CRITICALLY_DAMPED_SETTLE_FACTOR * zeta.max(1.0);

        if (zeta - 1.0).abs() < 0.001 {
            // x(t) = 1 - e^(-ω₀t) * (1 + ω₀t)
            let decay = (-omega_0 * t).exp();
            decay.mul_add(-omega_0.mul_add(t, 1.0), 1.0)
        } else if zeta < 1.0 {
            // x(t) = 1 - e^(-ζω₀t) * [cos(ωd t) + (ζ/√(1-ζ²)) sin(ωd t)]
            let complement = zeta.mul_add(-zeta, 1.0);
            let omega_d = omega_0 * complement.sqrt();
            let decay = (-zeta * omega_0 * t).exp();
            let cos_term = (omega_d * t).cos();
            let sin_term = (zeta / complement.sqrt()) * (omega_d * t).sin();
            decay.mul_add(-(cos_term + sin_term), 1.0)
        } else {
            // x(t) = 1 - e^(-ζω₀t) * [cosh(γt) + (ζ/√(ζ²-1)) sinh(γt)]
            let excess = zeta.mul_add(zeta, -1.0);
            let gamma = omega_0 * excess.sqrt();
            let decay = (-zeta * omega_0 * t).exp();
            let cosh_term = (gamma * t).cosh();
            let sinh_term = (zeta / excess.sqrt()) * (gamma * t).sinh();
            decay.mul_add(-(cosh_term + sinh_term), 1.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Inactive,
    Running,
    Paused,
}

/// Portion of the animation currently being played
#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
    from: f64,
    to: f64,
    elapsed: Duration,
    length: Duration,
}

impl Segment {
    fn new(from: f64, to: f64, length: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            length,
        }
    }
}

/// Result of advancing the animator by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorTick {
    /// Not running (inactive or paused); nothing changed
    Idle,
    /// Progress moved to the given value
    Progress(f64),
    /// Reached a terminal progress (0.0 or 1.0) and went inactive
    Finished(f64),
}

/// Progress-driven animation engine.
///
/// Only ever driven from the thread that owns it; every method is synchronous.
#[derive(Debug, Clone)]
pub struct ProgressAnimator {
    phase: Phase,
    progress: f64,
    reversed: bool,
    duration: Duration,
    curve: SpringCurve,
    segment: Option<Segment>,
}

impl Default for ProgressAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressAnimator {
    pub fn new() -> Self {
        Self {
            phase: Phase::Inactive,
            progress: 0.0,
            reversed: false,
            duration: Duration::ZERO,
            curve: SpringCurve::default(),
            segment: None,
        }
    }

    /// Begin a fresh animation from progress 0 toward 1
    pub fn start(&mut self, duration: Duration, damping_ratio: f64) {
        self.phase = Phase::Running;
        self.progress = 0.0;
        self.reversed = false;
        self.duration = duration;
        self.curve = SpringCurve::new(damping_ratio);
        self.segment = Some(Segment::new(0.0, 1.0, duration));
    }

    /// Freeze at the current progress and return `fraction_complete`.
    ///
    /// Pausing an already paused animator changes nothing and returns the same value.
    pub fn pause(&mut self) -> f64 {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
            self.segment = None;
        }
        self.fraction_complete()
    }

    /// Scrub to `fraction` (along the current direction of travel).
    ///
    /// Only honored while paused. Returns whether the value was applied.
    pub fn set_fraction_complete(&mut self, fraction: f64) -> bool {
        if self.phase != Phase::Paused || !fraction.is_finite() {
            return false;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        self.progress = if self.reversed {
            1.0 - fraction
        } else {
            fraction
        };
        true
    }

    /// Flip the direction of travel. A running animation retargets from where it is.
    pub fn set_reversed(&mut self, reversed: bool) {
        if self.reversed == reversed {
            return;
        }
        self.reversed = reversed;
        if self.phase == Phase::Running {
            self.segment = Some(self.remaining_segment(0.0));
        }
    }

    /// Continue toward the terminal progress of the current direction.
    ///
    /// A `duration_factor` of 0 plays the remaining share of the configured
    /// duration; a positive factor scales the full duration instead.
    pub fn resume(&mut self, duration_factor: f64) -> bool {
        if self.phase == Phase::Inactive {
            return false;
        }
        self.segment = Some(self.remaining_segment(duration_factor));
        self.phase = Phase::Running;
        true
    }

    /// Halt without reaching a terminal progress. No `Finished` tick follows.
    pub fn stop(&mut self) {
        self.phase = Phase::Inactive;
        self.segment = None;
    }

    /// Advance a running animation by `dt`
    pub fn advance(&mut self, dt: Duration) -> AnimatorTick {
        if self.phase != Phase::Running {
            return AnimatorTick::Idle;
        }
        let Some(mut segment) = self.segment else {
            return AnimatorTick::Idle;
        };

        segment.elapsed = segment.elapsed.saturating_add(dt);
        if segment.length.is_zero() || segment.elapsed >= segment.length {
            self.progress = segment.to;
            self.phase = Phase::Inactive;
            self.segment = None;
            return AnimatorTick::Finished(self.progress);
        }

        let t = segment.elapsed.as_secs_f64() / segment.length.as_secs_f64();
        let eased = self.curve.position(t);
        self.progress = (segment.from + (segment.to - segment.from) * eased).clamp(0.0, 1.0);
        self.segment = Some(segment);
        AnimatorTick::Progress(self.progress)
    }

    /// Progress from the animation's start (0) to its end (1), ignoring direction
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Progress along the current direction of travel
    pub fn fraction_complete(&self) -> f64 {
        if self.reversed {
            1.0 - self.progress
        } else {
            self.progress
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    fn remaining_segment(&self, duration_factor: f64) -> Segment {
        let end = if self.reversed { 0.0 } else { 1.0 };
        let remaining = self.duration.mul_f64((end - self.progress).abs());
        let length = if duration_factor.is_finite() && duration_factor > 0.0 {
            // Factors too large for a Duration play the remaining share instead
            Duration::try_from_secs_f64(self.duration.as_secs_f64() * duration_factor)
                .unwrap_or(remaining)
        } else {
            remaining
        };
        Segment::new(self.progress, end, length)
    }
}
