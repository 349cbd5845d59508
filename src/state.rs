//! Slideout state machine and placement computation
//!
//! The slideout pane is always in exactly one of four states. `toggle` and
//! `settle` are the only transition functions: `toggle` flips toward the
//! opposite terminal state (entering an animating state), `settle` collapses
//! an animating state into its terminal state once the frame animation lands.

use crate::geometry::{Rect, Size};

/// Open/close state of the slideout pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideoutState {
    Opening,
    Closing,
    Open,
    #[default]
    Closed,
}

impl SlideoutState {
    /// Whether a frame animation is in flight
    pub fn is_animating(self) -> bool {
        match self {
            SlideoutState::Opening | SlideoutState::Closing => true,
            SlideoutState::Open | SlideoutState::Closed => false,
        }
    }

    /// Whether the pane is visible or becoming visible
    pub fn is_open(self) -> bool {
        match self {
            SlideoutState::Open | SlideoutState::Opening => true,
            SlideoutState::Closed | SlideoutState::Closing => false,
        }
    }

    /// Flip toward the opposite terminal state
    pub fn toggle(self) -> SlideoutState {
        match self {
            SlideoutState::Open | SlideoutState::Opening => SlideoutState::Closing,
            SlideoutState::Closed | SlideoutState::Closing => SlideoutState::Opening,
        }
    }

    /// Collapse into the terminal state the current direction leads to
    pub fn settle(self) -> SlideoutState {
        match self {
            SlideoutState::Open | SlideoutState::Opening => SlideoutState::Open,
            SlideoutState::Closed | SlideoutState::Closing => SlideoutState::Closed,
        }
    }
}

/// Which horizontal side of the main content the slideout pane occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    Left,
    #[default]
    Right,
}

/// What caused a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleTrigger {
    /// Explicit user action (keyboard shortcut, click)
    Manual,
    /// Delayed auto-open fired after a selection change
    AutoOpen,
}

/// Which pane's edge the user is actively dragging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizingMode {
    #[default]
    None,
    Content,
    Slideout,
}

/// Decide which side of the content the pane should open on.
///
/// Returns `Left` when the candidate frame would overflow the screen's
/// right edge, `Right` otherwise. Callers that have no screen available
/// should keep their previously held placement instead.
pub fn compute_placement(window_frame: Rect, screen_frame: Rect, candidate: Size) -> Placement {
    if window_frame.min_x() + candidate.width > screen_frame.max_x() {
        Placement::Left
    } else {
        Placement::Right
    }
}
