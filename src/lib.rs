//! Slideout panel core for a clipboard-history popup
//!
//! This crate implements the geometry and animation state machine behind
//! a secondary "preview" pane that slides in and out beside a popup
//! window: the four-state open/close machine, left/right placement
//! against screen bounds, live drag-resize of both panes, delayed
//! cancellable auto-open, and synchronized window-frame animation.
//!
//! The host application provides windowing, history, and rendering
//! through the traits in [`host`]; everything here is single-threaded
//! and driven by the host event loop via [`panel::SlideoutPanel::tick`].

pub mod animation;
pub mod auto_open;
pub mod config;
pub mod config_paths;
pub mod dimensions;
pub mod geometry;
pub mod host;
pub mod panel;
pub mod resize;
pub mod state;
pub mod timer;
pub mod tracing;

// Re-export commonly used types
pub use config::{ConfigHandle, PanelConfig};
pub use dimensions::Dimensions;
pub use geometry::{Point, Rect, Size};
pub use host::{HostWindow, PanelSettings, PopupMetrics, PreviewSource, WidthSink};
pub use panel::SlideoutPanel;
pub use state::{Placement, ResizingMode, SlideoutState, ToggleTrigger};
