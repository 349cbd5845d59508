//! Panel geometry orchestrator
//!
//! `SlideoutPanel` ties the state machine, dimension store, resize
//! coordinator and auto-open scheduler to one host window. It is the only
//! owner of authoritative window geometry: collaborators mutate their own
//! scratch state and the panel commits frames.
//!
//! The host event loop is expected to forward window lifecycle events to
//! the `window_*` methods and to call [`SlideoutPanel::tick`] regularly
//! while [`SlideoutPanel::next_wakeup`] returns a deadline.

use std::time::Instant;

use crate::animation::{Easing, FrameAnimation, SLIDE_ANIMATION_DURATION};
use crate::auto_open::AutoOpenScheduler;
use crate::dimensions::{Dimensions, MINIMUM_CONTENT_WIDTH};
use crate::geometry::{Point, Rect, Size};
use crate::host::{HostWindow, PanelSettings, PopupMetrics, PreviewSource};
use crate::resize::{self, ResizeCoordinator};
use crate::state::{self, Placement, ResizingMode, SlideoutState, ToggleTrigger};

#[derive(Clone, Copy)]
struct ActiveAnimation {
    tween: FrameAnimation,
    /// State captured at animation start; settle only applies if the
    /// state machine still holds it when the animation completes.
    expected: SlideoutState,
}

/// Drives the slideout pane of one popup window
pub struct SlideoutPanel<W: HostWindow> {
    window: W,
    preview_source: Box<dyn PreviewSource>,
    metrics: Box<dyn PopupMetrics>,
    settings: Box<dyn PanelSettings>,

    state: SlideoutState,
    placement: Placement,
    dims: Dimensions,
    resize: ResizeCoordinator,
    auto_open: AutoOpenScheduler,

    animation: Option<ActiveAnimation>,
    /// Window origin at the instant the current transition began
    animation_origin: Option<Point>,
    /// State immediately before the current transition began
    animation_base_state: SlideoutState,
    /// Content width frozen at transition start, for renderers that must
    /// not track the live window width mid-animation
    content_animation_width: Option<f64>,

    state_subscribers: Vec<Box<dyn Fn(SlideoutState)>>,
}

impl<W: HostWindow> SlideoutPanel<W> {
    pub fn new(
        window: W,
        dims: Dimensions,
        preview_source: Box<dyn PreviewSource>,
        metrics: Box<dyn PopupMetrics>,
        settings: Box<dyn PanelSettings>,
    ) -> Self {
        Self {
            window,
            preview_source,
            metrics,
            settings,
            state: SlideoutState::Closed,
            placement: Placement::Right,
            dims,
            resize: ResizeCoordinator::new(),
            auto_open: AutoOpenScheduler::new(),
            animation: None,
            animation_origin: None,
            animation_base_state: SlideoutState::Closed,
            content_animation_width: None,
            state_subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> SlideoutState {
        self.state
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn resizing_mode(&self) -> ResizingMode {
        self.resize.mode()
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dims
    }

    pub fn dimensions_mut(&mut self) -> &mut Dimensions {
        &mut self.dims
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    /// Content width frozen at the start of the current transition, if
    /// one is in flight
    pub fn content_animation_width(&self) -> Option<f64> {
        self.content_animation_width
    }

    pub fn is_auto_open_pending(&self) -> bool {
        self.auto_open.is_pending()
    }

    /// Subscribe to state changes. Called synchronously after every
    /// transition, including settles.
    pub fn subscribe_state(&mut self, listener: impl Fn(SlideoutState) + 'static) {
        self.state_subscribers.push(Box::new(listener));
    }

    fn set_state(&mut self, state: SlideoutState) {
        if state == self.state {
            return;
        }
        self.state = state;
        for listener in &self.state_subscribers {
            listener(state);
        }
    }

    // ========================================================================
    // Open/close
    // ========================================================================

    /// Toggle the slideout pane, animating the window frame.
    ///
    /// Opening requires a preview subject; toggling toward open without
    /// one is a no-op. Manual triggers manage auto-open suppression: a
    /// manual close suppresses auto-open until the next manual open.
    pub fn toggle_preview(&mut self, trigger: ToggleTrigger, now: Instant) {
        if !self.state.is_open() && !self.preview_source.has_preview_subject() {
            tracing::debug!("toggle ignored, nothing to preview");
            return;
        }

        if trigger == ToggleTrigger::Manual {
            if self.state.is_open() {
                self.auto_open.suppress();
            } else {
                self.auto_open.clear_suppression();
            }
        }
        self.auto_open.cancel();

        let frame = self.window.frame();

        let next = self.state.toggle();
        if !self.state.is_animating() && next.is_animating() {
            self.animation_origin = Some(frame.origin);
            self.animation_base_state = self.state;
            self.content_animation_width = Some(self.dims.content_width());
        }
        self.set_state(next);

        let base = Size::new(self.dims.content_width(), frame.height());
        let mut size = self.compute_size(base, self.state);

        // Whole-unit widths avoid sub-pixel seams between the panes.
        let content_width = self.dims.content_width().round();
        let slideout_width = self.dims.slideout_width().round();
        size.width = content_width
            + if self.state.is_open() {
                slideout_width
            } else {
                0.0
            };

        if self.state.is_open() {
            self.placement = self.compute_placement(frame, size);
        }

        // The captured origin is the resting position of the closed (or
        // open) window; the y offset keeps the bottom edge anchored, and
        // left placement shifts x by the slideout width in the direction
        // the base state dictates.
        let mut origin = self.animation_origin.unwrap_or(frame.origin);
        origin.y += frame.height() - size.height;
        if self.placement == Placement::Left {
            if self.animation_base_state == SlideoutState::Closed && self.state.is_open() {
                origin.x -= slideout_width;
            } else if self.animation_base_state == SlideoutState::Open && !self.state.is_open() {
                origin.x += slideout_width;
            }
            // Otherwise the base origin already is the target position.
        }

        let target = Rect {
            origin,
            size,
        };
        tracing::debug!(state = ?self.state, placement = ?self.placement, ?target, "slideout transition");
        self.animation = Some(ActiveAnimation {
            tween: FrameAnimation::new(
                frame,
                target,
                now,
                SLIDE_ANIMATION_DURATION,
                Easing::EaseInOut,
            ),
            expected: self.state,
        });
    }

    /// Candidate placement for the given frame and size, keeping the
    /// current placement when no screen is available.
    pub fn compute_placement(&self, window_frame: Rect, candidate: Size) -> Placement {
        match self.window.screen_bounds() {
            Some(screen) => state::compute_placement(window_frame, screen, candidate),
            None => self.placement,
        }
    }

    /// Window size for the given state: the slideout width is appended
    /// when open, the height always follows the popup's own policy.
    pub fn compute_size(&self, base: Size, state: SlideoutState) -> Size {
        let mut size = base;
        if state.is_open() {
            size.width += self.dims.slideout_width();
        }
        size.height = self.metrics.preferred_popup_height(base.height);
        size
    }

    // ========================================================================
    // Pumping
    // ========================================================================

    /// Advance timers and the in-flight animation to `now`.
    ///
    /// A completion only settles the state machine if the state still
    /// equals the one captured at animation start; a toggle issued while
    /// the animation played replaces it and wins.
    pub fn tick(&mut self, now: Instant) {
        if self.auto_open.fire_due(now) && !self.state.is_open() {
            self.toggle_preview(ToggleTrigger::AutoOpen, now);
        }

        if let Some(anim) = self.animation {
            if anim.tween.is_finished(now) {
                self.animation = None;
                self.window.set_frame(anim.tween.end_frame());
                if self.state == anim.expected {
                    self.set_state(anim.expected.settle());
                    self.animation_origin = None;
                    self.content_animation_width = None;
                    tracing::debug!(state = ?self.state, "slideout settled");
                }
            } else {
                self.window.set_frame(anim.tween.frame_at(now));
            }
        }
    }

    /// Earliest instant at which `tick` has work to do, if any
    pub fn next_wakeup(&self) -> Option<Instant> {
        let animation_end = self.animation.as_ref().map(|anim| anim.tween.ends_at());
        match (self.auto_open.next_deadline(), animation_end) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (deadline, end) => deadline.or(end),
        }
    }

    // ========================================================================
    // Auto-open
    // ========================================================================

    /// Re-arm the delayed auto-open. Call on every selection change; the
    /// previous trigger is always cancelled first.
    pub fn start_auto_open(&mut self, now: Instant) {
        self.auto_open
            .start(now, self.settings.auto_open_delay(), self.state.is_open());
    }

    pub fn cancel_auto_open(&mut self) {
        self.auto_open.cancel();
    }

    // ========================================================================
    // Divider drags
    // ========================================================================

    /// Begin dragging the divider between the panes. Only meaningful
    /// while the pane is fully open.
    pub fn begin_divider_drag(&mut self) {
        if self.state != SlideoutState::Open {
            return;
        }
        self.resize.begin(ResizingMode::Slideout, &mut self.dims);
    }

    /// Apply the cumulative divider translation since the drag began
    pub fn update_divider_drag(&mut self, translation: f64) {
        let total = self.window.frame().width();
        self.resize
            .update_divider(translation, self.placement, total, &mut self.dims);
    }

    pub fn end_divider_drag(&mut self) {
        self.resize.end(&mut self.dims);
    }

    // ========================================================================
    // Host window lifecycle
    // ========================================================================

    pub fn window_will_move(&mut self) {
        self.refresh_placement();
    }

    pub fn window_did_move(&mut self) {
        self.refresh_placement();
    }

    /// Recompute which side the pane would open on. Skipped while the
    /// pane is visible so unrelated moves do not flip a shown pane.
    fn refresh_placement(&mut self) {
        if self.state.is_open() {
            return;
        }
        let frame = self.window.frame();
        let candidate = self.compute_size(frame.size, SlideoutState::Open);
        let placement = self.compute_placement(frame, candidate);
        if placement != self.placement {
            tracing::debug!(?placement, "placement flipped");
        }
        self.placement = placement;
    }

    pub fn window_will_start_live_resize(&mut self) {
        self.auto_open.cancel();
    }

    /// Constrain and react to a proposed window size.
    ///
    /// On the first callback of a live-resize session this decides which
    /// pane the drag targets from the cursor position. Returns the size
    /// the host should actually apply, clamped to the pane minimums.
    /// Outside animation and live-resize, a size change means the user
    /// resized the whole popup, so the content width is persisted.
    pub fn window_will_resize(&mut self, proposed: Size, mouse_x: f64) -> Size {
        let frame = self.window.frame();
        let live = self.window.is_live_resizing();

        if live && self.resize.mode() == ResizingMode::None {
            let mode = resize::window_resize_mode(
                mouse_x,
                frame.width(),
                self.placement,
                self.state == SlideoutState::Open,
            );
            self.resize.begin(mode, &mut self.dims);
        }

        let mode = if live {
            self.resize.mode()
        } else {
            ResizingMode::None
        };
        let min_width =
            resize::minimum_window_width(mode, self.state == SlideoutState::Open, &self.dims);
        let mut size = proposed;
        size.width = size.width.max(min_width.max(MINIMUM_CONTENT_WIDTH));

        if live {
            self.resize
                .update_window(size.width, self.state == SlideoutState::Open, &mut self.dims);
        } else if !self.state.is_animating() {
            self.dims.renotify_content_width();
        }

        size
    }

    pub fn window_did_end_live_resize(&mut self, now: Instant) {
        self.resize.end(&mut self.dims);
        self.start_auto_open(now);
    }

    pub fn window_did_become_focused(&mut self, now: Instant) {
        self.auto_open.enable();
        if self.preview_source.has_preview_subject() {
            self.start_auto_open(now);
        }
    }

    pub fn window_did_resign_focused(&mut self) {
        self.auto_open.disable();
    }

    /// The popup closed out from under the pane: drop any in-flight
    /// animation and pending trigger and force the terminal closed state.
    pub fn window_did_close(&mut self) {
        self.animation = None;
        self.animation_origin = None;
        self.content_animation_width = None;
        self.auto_open.cancel();
        self.set_state(SlideoutState::Closed);
    }
}
