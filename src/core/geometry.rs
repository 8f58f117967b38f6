use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Point in surface pixel space (origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    PI * degrees / 180.0
}

#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Rotates `point` about `center` by `degrees`.
///
/// Positive angles turn clockwise as seen on a y-down surface, so rotating
/// the bottom of a circle by 90 degrees lands on its left edge.
#[must_use]
pub fn rotate_about(point: Point, center: Point, degrees: f64) -> Point {
    let (sin, cos) = degrees_to_radians(degrees).sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point::new(
        center.x + dx * cos - dy * sin,
        center.y + dx * sin + dy * cos,
    )
}
