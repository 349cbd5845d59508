//! Layout primitives for window-frame math
//!
//! All values are in logical units. The coordinate convention follows the
//! host window: `origin` is the frame corner the host anchors on, `y`
//! grows toward the screen edge opposite the popup's anchored bottom edge.

/// A point in logical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in logical units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Rectangle for frame calculations
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Component-wise linear interpolation between two frames.
    /// `t` is expected in `0.0..=1.0`; endpoints are returned exactly.
    pub fn lerp(from: Rect, to: Rect, t: f64) -> Rect {
        if t <= 0.0 {
            return from;
        }
        if t >= 1.0 {
            return to;
        }
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Rect {
            origin: Point::new(
                mix(from.origin.x, to.origin.x),
                mix(from.origin.y, to.origin.y),
            ),
            size: Size::new(
                mix(from.size.width, to.size.width),
                mix(from.size.height, to.size.height),
            ),
        }
    }
}
