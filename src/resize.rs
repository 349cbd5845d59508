//! Live-resize coordination
//!
//! Tracks which pane's edge the user is dragging and maintains the
//! provisional widths for the duration of one gesture. Two kinds of
//! gesture exist: dragging the internal divider between the panes, and
//! dragging the host window's own edge. Scratch widths only become
//! authoritative (and hit the persistence sink) in `end`.

use crate::dimensions::{Dimensions, MINIMUM_CONTENT_WIDTH, MINIMUM_SLIDEOUT_WIDTH};
use crate::state::{Placement, ResizingMode};

/// Authoritative widths captured when a gesture begins; divider deltas
/// are applied against these, not against the moving scratch values.
#[derive(Debug, Clone, Copy)]
struct DragBase {
    slideout: f64,
}

/// Tracks the active live-resize gesture
pub struct ResizeCoordinator {
    mode: ResizingMode,
    base: Option<DragBase>,
}

impl ResizeCoordinator {
    pub fn new() -> Self {
        Self {
            mode: ResizingMode::None,
            base: None,
        }
    }

    pub fn mode(&self) -> ResizingMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.mode != ResizingMode::None
    }

    /// Start a gesture. Called once per live-resize; syncs the scratch
    /// widths to the authoritative values so the gesture starts clean.
    pub fn begin(&mut self, mode: ResizingMode, dims: &mut Dimensions) {
        tracing::info!(?mode, "starting resize");
        dims.sync_scratch();
        self.base = Some(DragBase {
            slideout: dims.slideout_width(),
        });
        self.mode = mode;
    }

    /// Apply a divider drag. `translation` is the cumulative horizontal
    /// drag distance since the gesture began; its direction is mirrored
    /// for `Placement::Left` because the opposite pane edge is anchored.
    /// Both panes always sum to `total_width`, each clamped to its minimum.
    pub fn update_divider(
        &mut self,
        translation: f64,
        placement: Placement,
        total_width: f64,
        dims: &mut Dimensions,
    ) {
        let Some(base) = self.base else { return };
        if self.mode != ResizingMode::Slideout {
            return;
        }

        let sign = match placement {
            Placement::Right => -1.0,
            Placement::Left => 1.0,
        };
        let max_slideout = (total_width - MINIMUM_CONTENT_WIDTH).max(MINIMUM_SLIDEOUT_WIDTH);
        let slideout = (base.slideout + sign * translation)
            .clamp(MINIMUM_SLIDEOUT_WIDTH, max_slideout);

        dims.slideout_resize_width = slideout;
        dims.content_resize_width = total_width - slideout;
    }

    /// Recompute the dragged pane's scratch width while the window edge
    /// itself is being resized: the other pane keeps its authoritative
    /// width and the dragged pane absorbs the remainder.
    pub fn update_window(&mut self, total_width: f64, pane_open: bool, dims: &mut Dimensions) {
        match self.mode {
            ResizingMode::None => {}
            ResizingMode::Content => {
                let slideout = if pane_open { dims.slideout_width() } else { 0.0 };
                dims.content_resize_width = (total_width - slideout).max(MINIMUM_CONTENT_WIDTH);
            }
            ResizingMode::Slideout => {
                dims.slideout_resize_width =
                    (total_width - dims.content_width()).max(MINIMUM_SLIDEOUT_WIDTH);
            }
        }
    }

    /// Commit the scratch widths into the authoritative fields (firing the
    /// persistence sink) and clear the mode. No-op when no gesture is active.
    pub fn end(&mut self, dims: &mut Dimensions) {
        if self.mode == ResizingMode::None {
            return;
        }
        tracing::info!(mode = ?self.mode, "ended resize");
        dims.set_content_width(dims.content_resize_width);
        dims.set_slideout_width(dims.slideout_resize_width);
        self.mode = ResizingMode::None;
        self.base = None;
    }
}

impl Default for ResizeCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the resize mode when the user starts dragging the host window's
/// edge: dragging the edge on the slideout's side resizes the slideout,
/// anything else resizes the content. A cursor exactly on the window
/// midpoint is ambiguous and resolves to `Content`.
pub fn window_resize_mode(
    mouse_x: f64,
    window_width: f64,
    placement: Placement,
    pane_open: bool,
) -> ResizingMode {
    let midpoint = window_width / 2.0;
    if mouse_x == midpoint {
        return ResizingMode::Content;
    }
    let cursor_side = if mouse_x < midpoint {
        Placement::Left
    } else {
        Placement::Right
    };
    if cursor_side == placement && pane_open {
        ResizingMode::Slideout
    } else {
        ResizingMode::Content
    }
}

/// Minimum total window width to enforce while the window edge is being
/// live-resized in the given mode.
pub fn minimum_window_width(mode: ResizingMode, pane_open: bool, dims: &Dimensions) -> f64 {
    let mut min_content = MINIMUM_CONTENT_WIDTH;
    let mut min_slideout = 0.0;
    match mode {
        ResizingMode::Content if pane_open => {
            min_slideout = dims.slideout_width();
        }
        ResizingMode::Slideout => {
            min_slideout = MINIMUM_SLIDEOUT_WIDTH;
            min_content = dims.content_width();
        }
        _ => {}
    }
    min_content + min_slideout
}
