//! Dimension store for the content and slideout pane widths
//!
//! Authoritative widths are clamped on every set and reported to the
//! persistence sink immediately. The `*_resize_width` scratch fields hold
//! live, uncommitted widths during a drag; the resize coordinator copies
//! them into the authoritative fields on drag completion.

use crate::host::WidthSink;

/// Smallest width the main content pane may take, in logical units
pub const MINIMUM_CONTENT_WIDTH: f64 = 200.0;

/// Smallest width the slideout pane may take, in logical units
pub const MINIMUM_SLIDEOUT_WIDTH: f64 = 200.0;

/// Slideout width used before any user resize has been persisted
pub const DEFAULT_SLIDEOUT_WIDTH: f64 = 400.0;

/// A committed width change, delivered to subscribers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidthChange {
    Content(f64),
    Slideout(f64),
}

/// Owns the clamped pane widths and their live-resize scratch values
pub struct Dimensions {
    content_width: f64,
    slideout_width: f64,

    /// Live content width during a drag, not yet committed
    pub content_resize_width: f64,
    /// Live slideout width during a drag, not yet committed
    pub slideout_resize_width: f64,

    sink: Box<dyn WidthSink>,
    subscribers: Vec<Box<dyn Fn(WidthChange)>>,
}

impl Dimensions {
    pub fn new(sink: Box<dyn WidthSink>) -> Self {
        Self {
            content_width: MINIMUM_CONTENT_WIDTH,
            slideout_width: DEFAULT_SLIDEOUT_WIDTH,
            content_resize_width: MINIMUM_CONTENT_WIDTH,
            slideout_resize_width: DEFAULT_SLIDEOUT_WIDTH,
            sink,
            subscribers: Vec::new(),
        }
    }

    /// Create a store seeded with persisted widths (clamped, but without
    /// echoing them back into the sink they just came from)
    pub fn with_widths(sink: Box<dyn WidthSink>, content: f64, slideout: f64) -> Self {
        let content = content.max(MINIMUM_CONTENT_WIDTH);
        let slideout = slideout.max(MINIMUM_SLIDEOUT_WIDTH);
        Self {
            content_width: content,
            slideout_width: slideout,
            content_resize_width: content,
            slideout_resize_width: slideout,
            sink,
            subscribers: Vec::new(),
        }
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    pub fn slideout_width(&self) -> f64 {
        self.slideout_width
    }

    /// Commit a content width. Clamps to the minimum and reports the
    /// clamped value to the persistence sink.
    pub fn set_content_width(&mut self, width: f64) {
        self.content_width = width.max(MINIMUM_CONTENT_WIDTH);
        self.sink.content_width_committed(self.content_width);
        self.notify(WidthChange::Content(self.content_width));
    }

    /// Commit a slideout width. Clamps to the minimum and reports the
    /// clamped value to the persistence sink.
    pub fn set_slideout_width(&mut self, width: f64) {
        self.slideout_width = width.max(MINIMUM_SLIDEOUT_WIDTH);
        self.sink.slideout_width_committed(self.slideout_width);
        self.notify(WidthChange::Slideout(self.slideout_width));
    }

    /// Re-report the current content width to the sink without changing it.
    /// Used when plain window resizing (no pane drag) moves the content edge.
    pub fn renotify_content_width(&self) {
        self.sink.content_width_committed(self.content_width);
    }

    /// Copy the authoritative widths into the scratch fields, marking the
    /// start of a live-resize session.
    pub fn sync_scratch(&mut self) {
        self.content_resize_width = self.content_width;
        self.slideout_resize_width = self.slideout_width;
    }

    /// Subscribe to committed width changes. No implicit reactivity: the
    /// rendering layer registers here and is called synchronously on commit.
    pub fn subscribe(&mut self, listener: impl Fn(WidthChange) + 'static) {
        self.subscribers.push(Box::new(listener));
    }

    fn notify(&self, change: WidthChange) {
        for listener in &self.subscribers {
            listener(change);
        }
    }
}

impl std::fmt::Debug for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dimensions")
            .field("content_width", &self.content_width)
            .field("slideout_width", &self.slideout_width)
            .field("content_resize_width", &self.content_resize_width)
            .field("slideout_resize_width", &self.slideout_resize_width)
            .finish()
    }
}
