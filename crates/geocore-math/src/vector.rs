//! Free 3D vectors.

use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::{GeometryError, Point3D, Result, Tolerance, Vec3, EPSILON};

/// A free vector in 3D space. Carries no position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3D {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector3D {
    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Unit vector along +X.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Unit vector along +Y.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Unit vector along +Z.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Displacement from `from` to `to`.
    #[inline]
    pub fn from_points(from: &Point3D, to: &Point3D) -> Self {
        Self::new(to.x - from.x, to.y - from.y, to.z - from.z)
    }

    /// Multiply every component by `factor`.
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Vector3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(&self, other: &Vector3D) -> Vector3D {
        Vector3D::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Whether the vector is shorter than [`EPSILON`].
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude() < EPSILON
    }

    /// Unit vector with the same direction.
    ///
    /// Fails with [`GeometryError::DegenerateInput`] when the magnitude is
    /// below [`EPSILON`] or not finite.
    pub fn normalize(&self) -> Result<Vector3D> {
        let mag = self.magnitude();
        if !mag.is_finite() {
            return Err(GeometryError::degenerate(format!(
                "cannot normalize a non-finite vector {:?}",
                self.to_array()
            )));
        }
        if mag < EPSILON {
            return Err(GeometryError::degenerate("cannot normalize a zero vector"));
        }
        Ok(*self / mag)
    }

    /// Angle to `other` in radians, in `[0, π]`.
    ///
    /// Fails with [`GeometryError::DegenerateInput`] if either vector is zero.
    pub fn angle(&self, other: &Vector3D) -> Result<f64> {
        let a = self.normalize()?;
        let b = other.normalize()?;
        Ok(a.dot(&b).clamp(-1.0, 1.0).acos())
    }

    /// Component of `self` along `other`.
    ///
    /// Fails with [`GeometryError::DegenerateInput`] when `other` is zero.
    pub fn project_onto(&self, other: &Vector3D) -> Result<Vector3D> {
        if other.is_zero() {
            return Err(GeometryError::degenerate("cannot project onto a zero vector"));
        }
        Ok(*other * (self.dot(other) / other.dot(other)))
    }

    /// True when the vectors are parallel or anti-parallel.
    #[inline]
    pub fn is_parallel(&self, other: &Vector3D) -> bool {
        self.cross(other).magnitude() < EPSILON
    }

    /// True when the vectors are orthogonal.
    #[inline]
    pub fn is_perpendicular(&self, other: &Vector3D) -> bool {
        self.dot(other).abs() < EPSILON
    }

    /// Components as `[x, y, z]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Build from `[x, y, z]`.
    #[inline]
    pub fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Componentwise comparison within the linear tolerance.
    pub fn approx_eq(&self, other: &Vector3D, tol: &Tolerance) -> bool {
        tol.is_zero(self.x - other.x)
            && tol.is_zero(self.y - other.y)
            && tol.is_zero(self.z - other.z)
    }

    /// True when every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: Vector3D) -> Vector3D {
        Vector3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: Vector3D) -> Vector3D {
        Vector3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: f64) -> Vector3D {
        self.scale(rhs)
    }
}

impl Mul<Vector3D> for f64 {
    type Output = Vector3D;

    fn mul(self, rhs: Vector3D) -> Vector3D {
        rhs.scale(self)
    }
}

impl Div<f64> for Vector3D {
    type Output = Vector3D;

    fn div(self, rhs: f64) -> Vector3D {
        Vector3D::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Vector3D {
        Vector3D::new(-self.x, -self.y, -self.z)
    }
}

impl From<Vec3> for Vector3D {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3D> for Vec3 {
    fn from(v: Vector3D) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}
