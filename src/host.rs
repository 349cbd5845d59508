//! Collaborator contracts
//!
//! The panel core never talks to a concrete windowing system, history
//! store, or preferences store. Everything it needs from the outside
//! world arrives through the narrow traits in this module, which keeps
//! the geometry logic testable with plain fakes.

use std::time::Duration;

use crate::geometry::Rect;

/// The window hosting the popup.
///
/// Implementations wrap whatever the platform provides (an `NSPanel`-like
/// floating window, a plain toolkit window, a fake in tests). `set_frame`
/// is called once per animation tick while a transition plays, then once
/// more with the final frame.
pub trait HostWindow {
    /// Current window frame in logical screen coordinates
    fn frame(&self) -> Rect;

    /// Commit a new window frame
    fn set_frame(&mut self, frame: Rect);

    /// Bounds of the screen the window currently sits on, if known
    fn screen_bounds(&self) -> Option<Rect>;

    /// Whether the user is dragging the window edge right now
    fn is_live_resizing(&self) -> bool;
}

/// Whether there is anything to preview.
///
/// Opening the slideout is gated on this: a selected history item or an
/// active multi-item paste stack.
pub trait PreviewSource {
    fn has_preview_subject(&self) -> bool;
}

/// The popup's own content-driven sizing policy.
///
/// The slideout never decides window height; it always defers to this.
pub trait PopupMetrics {
    fn preferred_popup_height(&self, content_height: f64) -> f64;
}

/// Configuration-sourced tunables
pub trait PanelSettings {
    /// Delay before an armed auto-open fires
    fn auto_open_delay(&self) -> Duration;
}

/// Persistence callbacks for committed pane widths.
///
/// Called with the clamped value every time an authoritative width is set,
/// so the configuration collaborator always holds the last committed size.
pub trait WidthSink {
    fn content_width_committed(&self, width: f64);
    fn slideout_width_committed(&self, width: f64);
}

/// A sink that drops all committed widths. Useful when persistence is
/// handled elsewhere or not wanted at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullWidthSink;

impl WidthSink for NullWidthSink {
    fn content_width_committed(&self, _width: f64) {}
    fn slideout_width_committed(&self, _width: f64) {}
}
