//! Frame tween engine
//!
//! A transition is one `FrameAnimation`: a start frame, a target frame, a
//! duration and an easing curve. The orchestrator samples `frame_at` on
//! every tick and commits the result to the host window; completion is a
//! plain predicate, so a stale animation that was replaced mid-flight
//! simply stops being sampled.

use std::time::{Duration, Instant};

use crate::geometry::Rect;

/// Duration of one slideout open/close transition
pub const SLIDE_ANIMATION_DURATION: Duration = Duration::from_millis(250);

/// Easing curve applied to animation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Smooth acceleration and deceleration, matching the platform's
    /// ease-in-ease-out media timing
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `0.0..=1.0` onto the curve
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            // Smoothstep: 3t^2 - 2t^3
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// A single in-flight window-frame transition
#[derive(Debug, Clone, Copy)]
pub struct FrameAnimation {
    from: Rect,
    to: Rect,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl FrameAnimation {
    pub fn new(from: Rect, to: Rect, started: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started,
            duration,
            easing,
        }
    }

    /// Linear progress in `0.0..=1.0`. A zero duration is instantly done.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// The frame the window should show at `now`
    pub fn frame_at(&self, now: Instant) -> Rect {
        Rect::lerp(self.from, self.to, self.easing.apply(self.progress(now)))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// The frame this animation lands on
    pub fn end_frame(&self) -> Rect {
        self.to
    }

    /// When this animation completes
    pub fn ends_at(&self) -> Instant {
        self.started + self.duration
    }
}
