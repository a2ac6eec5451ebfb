//! World to screen mapping.
//!
//! Screen space has its origin at the top-left corner of the canvas with
//! `+y` pointing down, so NDC `y` is flipped on the way out.

use geocore_math::Point3D;
use serde::{Deserialize, Serialize};

use crate::Camera;

/// A point in screen (pixel) space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate, left to right.
    pub x: f64,
    /// Y coordinate, top to bottom.
    pub y: f64,
}

impl Point2D {
    /// Create a new 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Map NDC `x, y` in `[-1, 1]` to pixels in `[0, width] × [0, height]`.
///
/// Values outside the unit square map outside the canvas; nothing is clipped.
#[inline]
pub fn ndc_to_screen(ndc_x: f64, ndc_y: f64, width: u32, height: u32) -> Point2D {
    Point2D {
        x: (ndc_x + 1.0) * 0.5 * f64::from(width),
        y: (1.0 - ndc_y) * 0.5 * f64::from(height),
    }
}

/// Project a world point through `camera` onto a `width × height` canvas.
pub fn project_point(point: &Point3D, camera: &Camera, width: u32, height: u32) -> Point2D {
    let [x, y, _] = camera.project_to_ndc(point);
    ndc_to_screen(x, y, width, height)
}
