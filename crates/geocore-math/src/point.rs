//! Affine points.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::{Point3, Tolerance, Vector3D};

/// A position in 3D space.
///
/// Points translate by vectors and subtract to vectors; adding two points
/// is not defined.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3D {
    /// Create a point from its coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin `(0, 0, 0)`.
    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: &Point3D) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared_to(&self, other: &Point3D) -> f64 {
        (*other - *self).magnitude_squared()
    }

    /// Point halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(&self, other: &Point3D) -> Point3D {
        Point3D::new(
            (self.x + other.x) * 0.5,
            (self.y + other.y) * 0.5,
            (self.z + other.z) * 0.5,
        )
    }

    /// Point moved by `offset`.
    #[inline]
    pub fn translate(&self, offset: &Vector3D) -> Point3D {
        *self + *offset
    }

    /// Position vector from the origin.
    #[inline]
    pub fn to_vector(&self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }

    /// Coordinates as `[x, y, z]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Build from `[x, y, z]`.
    #[inline]
    pub fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Coincidence test within the linear tolerance.
    pub fn approx_eq(&self, other: &Point3D, tol: &Tolerance) -> bool {
        tol.points_equal(self, other)
    }

    /// True when every coordinate is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add<Vector3D> for Point3D {
    type Output = Point3D;

    fn add(self, rhs: Vector3D) -> Point3D {
        Point3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Vector3D> for Point3D {
    type Output = Point3D;

    fn sub(self, rhs: Vector3D) -> Point3D {
        Point3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub for Point3D {
    type Output = Vector3D;

    fn sub(self, rhs: Point3D) -> Vector3D {
        Vector3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<Point3> for Point3D {
    fn from(p: Point3) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Point3D> for Point3 {
    fn from(p: Point3D) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}
