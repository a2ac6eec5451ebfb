//! Ray representation.

use geocore_math::{GeometryError, Point3D, Result, Vector3D, EPSILON};
use geocore_primitives::{Aabb, Plane, Sphere, Triangle};
use serde::{Deserialize, Serialize};

use crate::intersect::{self, AabbHit, PlaneHit, SphereHit, TriangleHit};

/// A ray in 3D space defined by origin and direction.
///
/// The direction is stored as given, so `t` is measured in multiples of
/// `direction` rather than in world units unless the ray is [normalized].
///
/// [normalized]: Ray::normalized
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3D,
    /// Direction of the ray, never zero.
    pub direction: Vector3D,
}

impl Ray {
    /// Create a new ray. Fails with `InvalidArgument` on a zero direction
    /// or a non-finite origin or direction.
    pub fn new(origin: Point3D, direction: Vector3D) -> Result<Self> {
        if !origin.is_finite() || !direction.is_finite() {
            return Err(GeometryError::invalid(format!(
                "ray origin {:?} and direction {:?} must be finite",
                origin.to_array(),
                direction.to_array()
            )));
        }
        if direction.magnitude() < EPSILON {
            return Err(GeometryError::invalid("ray direction must be non-zero"));
        }
        Ok(Self { origin, direction })
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    ///
    /// Negative `t` gives points behind the origin.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point3D {
        self.origin + self.direction * t
    }

    /// Same ray with a unit-length direction.
    pub fn normalized(&self) -> Ray {
        Ray {
            origin: self.origin,
            direction: self.direction / self.direction.magnitude(),
        }
    }

    /// See [`intersect::intersect_sphere`].
    #[inline]
    pub fn intersect_sphere(&self, sphere: &Sphere) -> Option<SphereHit> {
        intersect::intersect_sphere(self, sphere)
    }

    /// See [`intersect::intersect_plane`].
    #[inline]
    pub fn intersect_plane(&self, plane: &Plane) -> Option<PlaneHit> {
        intersect::intersect_plane(self, plane)
    }

    /// See [`intersect::intersect_triangle`].
    #[inline]
    pub fn intersect_triangle(&self, triangle: &Triangle) -> Option<TriangleHit> {
        intersect::intersect_triangle(self, triangle)
    }

    /// See [`intersect::intersect_aabb`].
    #[inline]
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<AabbHit> {
        intersect::intersect_aabb(self, aabb)
    }
}
