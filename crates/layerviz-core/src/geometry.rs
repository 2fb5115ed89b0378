//! Geometric primitives: Point, Rect.

use serde::{Deserialize, Serialize};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between two points.
    ///
    /// `t = 0.0` yields `self`, `t = 1.0` yields `other`. Values outside
    /// `[0, 1]` extrapolate along the same line.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from two corner points.
    #[must_use]
    pub fn from_points(top_left: Point, bottom_right: Point) -> Self {
        Self::new(
            top_left.x,
            top_left.y,
            bottom_right.x - top_left.x,
            bottom_right.y - top_left.y,
        )
    }

    /// Rectangle centered on `center` with the given half extents.
    #[must_use]
    pub fn around(center: Point, half_width: f32, half_height: f32) -> Self {
        Self::new(
            center.x - half_width,
            center.y - half_height,
            2.0 * half_width,
            2.0 * half_height,
        )
    }

    /// Calculate union with another rectangle.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = (self.x + self.width).max(other.x + other.width);
        let bottom = (self.y + self.height).max(other.y + other.height);

        Self::new(x, y, right - x, bottom - y)
    }

    /// Grow the rectangle by `amount` on every side.
    #[must_use]
    pub fn outset(&self, amount: f32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            (self.width + 2.0 * amount).max(0.0),
            (self.height + 2.0 * amount).max(0.0),
        )
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}
