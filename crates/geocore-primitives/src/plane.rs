//! Infinite planes in Hessian normal form.

use geocore_math::{GeometryError, Point3D, Result, Vector3D, EPSILON};
use serde::{Deserialize, Serialize};

/// The plane `normal · p + d = 0` with a unit-length `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Unit normal.
    pub normal: Vector3D,
    /// Offset so that `normal · p + d = 0` for points on the plane.
    pub d: f64,
}

impl Plane {
    /// Create a plane from a (not necessarily unit) normal and offset.
    ///
    /// The normal is normalized; `d` is taken as given. Fails with
    /// `InvalidArgument` when the normal is zero.
    pub fn new(normal: Vector3D, d: f64) -> Result<Self> {
        let normal = unit_normal(&normal)?;
        Ok(Self { normal, d })
    }

    /// Plane through `point` perpendicular to `normal`.
    ///
    /// Fails with `InvalidArgument` when the normal is zero.
    pub fn from_point_normal(point: &Point3D, normal: &Vector3D) -> Result<Self> {
        let normal = unit_normal(normal)?;
        let d = -normal.dot(&point.to_vector());
        Ok(Self { normal, d })
    }

    /// Plane through three points, with normal `(p2 - p1) × (p3 - p1)`.
    ///
    /// Fails with `DegenerateInput` when the points are collinear.
    pub fn from_three_points(p1: &Point3D, p2: &Point3D, p3: &Point3D) -> Result<Self> {
        let normal = (*p2 - *p1).cross(&(*p3 - *p1));
        if normal.magnitude() < EPSILON {
            return Err(GeometryError::degenerate(
                "points are collinear, no unique plane",
            ));
        }
        Self::from_point_normal(p1, &normal)
    }

    /// Signed distance from the plane; positive on the side the normal points to.
    #[inline]
    pub fn distance_to_point(&self, point: &Point3D) -> f64 {
        self.normal.dot(&point.to_vector()) + self.d
    }

    /// Orthogonal projection of `point` onto the plane.
    #[inline]
    pub fn closest_point(&self, point: &Point3D) -> Point3D {
        *point - self.normal * self.distance_to_point(point)
    }

    /// True when `point` lies on the plane within [`EPSILON`].
    #[inline]
    pub fn contains_point(&self, point: &Point3D) -> bool {
        self.distance_to_point(point).abs() < EPSILON
    }

    /// True when the normals are parallel or anti-parallel.
    #[inline]
    pub fn is_parallel(&self, other: &Plane) -> bool {
        self.normal.is_parallel(&other.normal)
    }

    /// Same plane with the opposite orientation.
    #[inline]
    pub fn flip_normal(&self) -> Plane {
        Plane {
            normal: -self.normal,
            d: -self.d,
        }
    }
}

fn unit_normal(normal: &Vector3D) -> Result<Vector3D> {
    normal
        .normalize()
        .map_err(|_| GeometryError::invalid("plane normal must be non-zero and finite"))
}
