//! Solid spheres.

use std::f64::consts::PI;

use geocore_math::{GeometryError, Point3D, Result, Vector3D};
use serde::{Deserialize, Serialize};

use crate::Aabb;

/// A sphere with a strictly positive radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center point.
    pub center: Point3D,
    /// Radius, always `> 0`.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere. Fails with `InvalidArgument` unless `radius > 0`
    /// and both center and radius are finite.
    pub fn new(center: Point3D, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::invalid(format!(
                "sphere radius must be positive and finite, got {radius}"
            )));
        }
        if !center.is_finite() {
            return Err(GeometryError::invalid(format!(
                "sphere center must be finite, got {:?}",
                center.to_array()
            )));
        }
        Ok(Self { center, radius })
    }

    /// Enclosed volume, `4/3 π r³`.
    #[inline]
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius.powi(3)
    }

    /// Surface area, `4 π r²`.
    #[inline]
    pub fn surface_area(&self) -> f64 {
        4.0 * PI * self.radius.powi(2)
    }

    /// True when `point` is inside or on the surface.
    #[inline]
    pub fn contains_point(&self, point: &Point3D) -> bool {
        self.center.distance_to(point) <= self.radius
    }

    /// Distance from `point` to the surface; 0 for points inside.
    #[inline]
    pub fn distance_to_point(&self, point: &Point3D) -> f64 {
        (self.center.distance_to(point) - self.radius).max(0.0)
    }

    /// True when the two solid spheres overlap or touch.
    pub fn intersects_sphere(&self, other: &Sphere) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared_to(&other.center) <= reach * reach
    }

    /// Axis-aligned box enclosing the sphere.
    pub fn bounding_box(&self) -> Aabb {
        let r = Vector3D::new(self.radius, self.radius, self.radius);
        Aabb::from_point(self.center - r).expand_by_point(&(self.center + r))
    }
}
