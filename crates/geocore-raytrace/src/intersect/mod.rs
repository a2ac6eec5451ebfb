//! Ray-primitive intersection algorithms.
//!
//! Each primitive has a dedicated closed-form intersector. Parameters are
//! in units of the ray's direction and keep their sign.

mod aabb;
mod plane;
mod sphere;
mod triangle;

pub use aabb::intersect_aabb;
pub use plane::intersect_plane;
pub use sphere::intersect_sphere;
pub use triangle::intersect_triangle;

use geocore_math::Point3D;
use geocore_primitives::Barycentric;
use serde::{Deserialize, Serialize};

/// Both roots of a ray-sphere intersection, `t1 <= t2`.
///
/// A tangent ray has `t1 == t2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereHit {
    /// Nearer parameter.
    pub t1: f64,
    /// Farther parameter.
    pub t2: f64,
}

impl SphereHit {
    /// Smallest non-negative root, if the sphere is not entirely behind the origin.
    pub fn nearest_non_negative(&self) -> Option<f64> {
        [self.t1, self.t2].into_iter().find(|t| *t >= 0.0)
    }
}

/// Ray-plane intersection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneHit {
    /// Parameter along the ray.
    pub t: f64,
    /// 3D intersection point.
    pub point: Point3D,
}

/// Ray-triangle intersection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleHit {
    /// Parameter along the ray.
    pub t: f64,
    /// 3D intersection point.
    pub point: Point3D,
    /// Barycentric coordinates of `point` in the triangle.
    pub barycentric: Barycentric,
}

/// Entry and exit parameters of a ray through a box, `t_min <= t_max`.
///
/// `t_min` is negative when the origin is inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AabbHit {
    /// Entry parameter.
    pub t_min: f64,
    /// Exit parameter.
    pub t_max: f64,
}
