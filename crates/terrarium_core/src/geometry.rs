//! Canvas-space points and exponential smoothing.
//!
//! Canvas coordinates are y-down pixels with the origin at the top-left.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Close the fraction `k` of the remaining gap to `target`.
    ///
    /// This is one step of exponential smoothing, not a fixed-duration tween:
    /// calling it repeatedly with the same target shrinks the gap by `1 - k`
    /// per call. A zero gap yields no movement at all.
    pub fn approach(&mut self, target: Point, k: f32) {
        self.x += (target.x - self.x) * k;
        self.y += (target.y - self.y) * k;
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}
