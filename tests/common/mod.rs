//! Shared test helpers for integration tests
//!
//! Note: Items may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use slideout::animation::SLIDE_ANIMATION_DURATION;
use slideout::dimensions::WidthChange;
use slideout::host::{HostWindow, PanelSettings, PopupMetrics, PreviewSource, WidthSink};
use slideout::{Dimensions, Rect, SlideoutPanel};

/// Auto-open delay used by all test harnesses
pub const DELAY: Duration = Duration::from_millis(100);

/// Duration of one open/close transition
pub const ANIMATION: Duration = SLIDE_ANIMATION_DURATION;

pub struct WindowState {
    pub frame: Rect,
    pub screen: Option<Rect>,
    pub live_resizing: bool,
    pub frame_history: Vec<Rect>,
}

/// Host window fake backed by shared state so tests keep a handle after
/// the panel takes ownership
#[derive(Clone)]
pub struct FakeWindow(pub Rc<RefCell<WindowState>>);

impl FakeWindow {
    pub fn new(frame: Rect, screen: Option<Rect>) -> Self {
        Self(Rc::new(RefCell::new(WindowState {
            frame,
            screen,
            live_resizing: false,
            frame_history: Vec::new(),
        })))
    }

    pub fn frame(&self) -> Rect {
        self.0.borrow().frame
    }

    pub fn set_live_resizing(&self, live: bool) {
        self.0.borrow_mut().live_resizing = live;
    }

    pub fn set_screen(&self, screen: Option<Rect>) {
        self.0.borrow_mut().screen = screen;
    }

    pub fn move_to(&self, x: f64, y: f64) {
        let mut state = self.0.borrow_mut();
        state.frame.origin.x = x;
        state.frame.origin.y = y;
    }
}

impl HostWindow for FakeWindow {
    fn frame(&self) -> Rect {
        self.0.borrow().frame
    }

    fn set_frame(&mut self, frame: Rect) {
        let mut state = self.0.borrow_mut();
        state.frame = frame;
        state.frame_history.push(frame);
    }

    fn screen_bounds(&self) -> Option<Rect> {
        self.0.borrow().screen
    }

    fn is_live_resizing(&self) -> bool {
        self.0.borrow().live_resizing
    }
}

/// Preview-subject fake with a shared toggle
#[derive(Clone)]
pub struct FakePreview(pub Rc<Cell<bool>>);

impl FakePreview {
    pub fn new(has_subject: bool) -> Self {
        Self(Rc::new(Cell::new(has_subject)))
    }

    pub fn set(&self, has_subject: bool) {
        self.0.set(has_subject);
    }
}

impl PreviewSource for FakePreview {
    fn has_preview_subject(&self) -> bool {
        self.0.get()
    }
}

/// Height policy fake: passthrough unless a fixed height is configured
pub struct FakeMetrics {
    pub fixed_height: Option<f64>,
}

impl PopupMetrics for FakeMetrics {
    fn preferred_popup_height(&self, content_height: f64) -> f64 {
        self.fixed_height.unwrap_or(content_height)
    }
}

pub struct FakeSettings {
    pub delay: Duration,
}

impl PanelSettings for FakeSettings {
    fn auto_open_delay(&self) -> Duration {
        self.delay
    }
}

/// Sink recording every committed width in order
pub struct RecordingSink(pub Rc<RefCell<Vec<WidthChange>>>);

impl WidthSink for RecordingSink {
    fn content_width_committed(&self, width: f64) {
        self.0.borrow_mut().push(WidthChange::Content(width));
    }

    fn slideout_width_committed(&self, width: f64) {
        self.0.borrow_mut().push(WidthChange::Slideout(width));
    }
}

pub struct Harness {
    pub panel: SlideoutPanel<FakeWindow>,
    pub window: FakeWindow,
    pub preview: FakePreview,
    pub committed: Rc<RefCell<Vec<WidthChange>>>,
    pub t0: Instant,
}

impl Harness {
    /// Window `{100, 100, 400, 300}` on the given screen, content 400,
    /// slideout 400, preview subject present.
    pub fn on_screen(screen: Rect) -> Self {
        Self::build(Rect::new(100.0, 100.0, 400.0, 300.0), Some(screen), None)
    }

    pub fn build(frame: Rect, screen: Option<Rect>, fixed_height: Option<f64>) -> Self {
        let window = FakeWindow::new(frame, screen);
        let preview = FakePreview::new(true);
        let committed = Rc::new(RefCell::new(Vec::new()));
        let dims = Dimensions::with_widths(
            Box::new(RecordingSink(committed.clone())),
            400.0,
            400.0,
        );
        let panel = SlideoutPanel::new(
            window.clone(),
            dims,
            Box::new(preview.clone()),
            Box::new(FakeMetrics { fixed_height }),
            Box::new(FakeSettings { delay: DELAY }),
        );
        Self {
            panel,
            window,
            preview,
            committed,
            t0: Instant::now(),
        }
    }
}

/// Screen too narrow for the open pane on the right: opening flips left.
/// Candidate width 800 from x=100 overflows the 800-wide screen.
pub fn narrow_harness() -> Harness {
    Harness::on_screen(Rect::new(0.0, 0.0, 800.0, 600.0))
}

/// Wide screen: the pane always fits on the right
pub fn wide_harness() -> Harness {
    Harness::on_screen(Rect::new(0.0, 0.0, 1600.0, 600.0))
}
