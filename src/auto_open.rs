//! Auto-open scheduling
//!
//! A single-slot, cancellable delayed trigger: arming always cancels the
//! previous trigger first, so auto-open can never race with itself.
//! Suppression makes sure the pane never fights a deliberate dismissal —
//! after a manual close nothing is scheduled until the next manual open.

use std::time::{Duration, Instant};

use crate::timer::{TimerHandle, TimerQueue};

/// Single in-flight delayed open trigger
pub struct AutoOpenScheduler {
    enabled: bool,
    suppressed: bool,
    queue: TimerQueue<()>,
    pending: Option<TimerHandle>,
}

impl AutoOpenScheduler {
    pub fn new() -> Self {
        Self {
            enabled: true,
            suppressed: false,
            queue: TimerQueue::new(),
            pending: None,
        }
    }

    /// Arm the trigger. Cancels any pending trigger first, then schedules
    /// a new one unless auto-open is disabled, suppressed, or the pane is
    /// already open. Returns whether a trigger was scheduled.
    pub fn start(&mut self, now: Instant, delay: Duration, pane_open: bool) -> bool {
        self.cancel();

        if !self.enabled || self.suppressed || pane_open {
            tracing::trace!(
                enabled = self.enabled,
                suppressed = self.suppressed,
                pane_open,
                "auto-open not armed"
            );
            return false;
        }

        self.pending = Some(self.queue.schedule(delay, now, ()));
        tracing::debug!(?delay, "auto-open armed");
        true
    }

    /// Cancel any pending trigger. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.queue.cancel(handle);
            tracing::debug!("auto-open cancelled");
        }
    }

    /// Returns true when an armed trigger's delay has elapsed.
    /// The trigger is consumed; the caller decides whether to toggle.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        let fired = !self.queue.fire_due(now).is_empty();
        if fired {
            self.pending = None;
            tracing::debug!("auto-open fired");
        }
        fired
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disable future arming and cancel anything pending
    pub fn disable(&mut self) {
        self.enabled = false;
        self.cancel();
    }

    /// Set after a manual close so the pane does not immediately reopen
    pub fn suppress(&mut self) {
        self.suppressed = true;
    }

    /// Cleared by a manual open
    pub fn clear_suppression(&mut self) {
        self.suppressed = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .map(|handle| self.queue.is_pending(handle))
            .unwrap_or(false)
    }

    /// When the pending trigger will fire, if one is armed
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.next_deadline()
    }
}

impl Default for AutoOpenScheduler {
    fn default() -> Self {
        Self::new()
    }
}
