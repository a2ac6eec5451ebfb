//! Finite line segments.

use geocore_math::{Point3D, Result, Vector3D, EPSILON};
use serde::{Deserialize, Serialize};

/// A straight segment between two points.
///
/// `start == end` is allowed; such a segment has length 0 and no direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// First endpoint (`t = 0`).
    pub start: Point3D,
    /// Second endpoint (`t = 1`).
    pub end: Point3D,
}

impl LineSegment {
    /// Create a segment from `start` to `end`.
    pub fn new(start: Point3D, end: Point3D) -> Self {
        Self { start, end }
    }

    /// Unnormalized displacement `end - start`.
    #[inline]
    pub fn vector(&self) -> Vector3D {
        self.end - self.start
    }

    /// Distance between the endpoints.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// True when the endpoints coincide within [`EPSILON`].
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length() < EPSILON
    }

    /// Unit direction from `start` to `end`.
    ///
    /// Fails with `DegenerateInput` on a zero-length segment.
    pub fn direction(&self) -> Result<Vector3D> {
        self.vector().normalize()
    }

    /// Point halfway along the segment.
    #[inline]
    pub fn midpoint(&self) -> Point3D {
        self.start.midpoint(&self.end)
    }

    /// Linear interpolation `start + (end - start) * t`. Not clamped, so
    /// `t` outside `[0, 1]` extrapolates along the supporting line.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point3D {
        self.start + self.vector() * t
    }

    /// Closest point on the segment to `point`.
    pub fn closest_point(&self, point: &Point3D) -> Point3D {
        let dir = self.vector();
        let len_sq = dir.magnitude_squared();
        if len_sq < EPSILON * EPSILON {
            return self.start;
        }
        let t = (*point - self.start).dot(&dir) / len_sq;
        self.point_at(t.clamp(0.0, 1.0))
    }

    /// Distance from `point` to the closest point on the segment.
    #[inline]
    pub fn distance_to_point(&self, point: &Point3D) -> f64 {
        point.distance_to(&self.closest_point(point))
    }
}
