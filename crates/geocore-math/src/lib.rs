#![warn(missing_docs)]

//! Math types for the geocore geometry kernel.
//!
//! Value types for 3D geometry (points and free vectors), the shared
//! error type, tolerance constants, and a 4x4 homogeneous transform
//! backed by nalgebra.

mod error;
mod point;
mod vector;

pub use error::{GeometryError, Result};
pub use point::Point3D;
pub use vector::Vector3D;

use nalgebra::{Matrix4, Vector4};

/// nalgebra point used for matrix math.
pub type Point3 = nalgebra::Point3<f64>;

/// nalgebra vector used for matrix math.
pub type Vec3 = nalgebra::Vector3<f64>;

/// Crate-wide comparison epsilon for lengths, dot products and distances.
pub const EPSILON: f64 = 1e-10;

/// Convert degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Convert radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// A 4x4 homogeneous transformation matrix.
///
/// Points are column vectors: `apply_point(p) = matrix * [p, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Build from 16 values in row-major order.
    pub fn from_row_major(values: &[f64; 16]) -> Self {
        Self {
            matrix: Matrix4::from_row_slice(values),
        }
    }

    /// Translation by `offset`.
    pub fn translation(offset: &Vector3D) -> Self {
        Self {
            matrix: Matrix4::new_translation(&Vec3::from(*offset)),
        }
    }

    /// Uniform scale by `factor` with `center` held fixed.
    pub fn scaling_about(center: &Point3D, factor: f64) -> Self {
        let to_origin = Self::translation(&-center.to_vector());
        let back = Self::translation(&center.to_vector());
        let scale = Self {
            matrix: Matrix4::new_scaling(factor),
        };
        back.then(&scale).then(&to_origin)
    }

    /// Compose: `self * other`, i.e. `other` is applied first.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Full homogeneous product `matrix * [p, 1]`, without the divide.
    pub fn apply_homogeneous(&self, p: &Point3D) -> [f64; 4] {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        [v.x, v.y, v.z, v.w]
    }

    /// Transform a point (affine part only).
    pub fn apply_point(&self, p: &Point3D) -> Point3D {
        let [x, y, z, _] = self.apply_homogeneous(p);
        Point3D::new(x, y, z)
    }

    /// Transform a direction vector; translation has no effect.
    pub fn apply_vec(&self, v: &Vector3D) -> Vector3D {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vector3D::new(r.x, r.y, r.z)
    }

    /// The 16 matrix entries in row-major order.
    pub fn to_row_major(&self) -> [f64; 16] {
        let m = &self.matrix;
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = m[(row, col)];
            }
        }
        out
    }
}

/// Linear tolerance for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
}

impl Tolerance {
    /// Kernel default: [`EPSILON`].
    pub const DEFAULT: Self = Self { linear: EPSILON };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3D, b: &Point3D) -> bool {
        a.distance_to(b) < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_translation() {
        let t = Transform::translation(&Vector3D::new(10.0, 20.0, 30.0));
        let result = t.apply_point(&Point3D::new(1.0, 2.0, 3.0));
        assert!((result.x - 11.0).abs() < 1e-12);
        assert!((result.y - 22.0).abs() < 1e-12);
        assert!((result.z - 33.0).abs() < 1e-12);
    }

    #[test]
    fn test_translation_ignores_vectors() {
        let t = Transform::translation(&Vector3D::new(10.0, 20.0, 30.0));
        let v = Vector3D::new(1.0, 0.0, 0.0);
        assert_eq!(t.apply_vec(&v), v);
    }

    #[test]
    fn test_scaling_about_keeps_center_fixed() {
        let center = Point3D::new(1.0, 2.0, 3.0);
        let t = Transform::scaling_about(&center, 3.0);
        assert_eq!(t.apply_point(&center), center);

        let p = t.apply_point(&Point3D::new(2.0, 2.0, 3.0));
        assert!((p.x - 4.0).abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);

        // Directions only see the linear part
        let v = t.apply_vec(&Vector3D::new(1.0, -1.0, 0.0));
        assert_eq!(v, Vector3D::new(3.0, -3.0, 0.0));
    }

    #[test]
    fn test_compose_applies_right_operand_first() {
        let translate = Transform::translation(&Vector3D::new(1.0, 0.0, 0.0));
        let scale = Transform::scaling_about(&Point3D::origin(), 2.0);
        // origin -> (1,0,0) -> (2,0,0)
        let result = scale.then(&translate).apply_point(&Point3D::origin());
        assert!((result.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_row_major_round_trip() {
        let t = Transform::translation(&Vector3D::new(1.0, 2.0, 3.0));
        let rows = t.to_row_major();
        assert_eq!(rows[3], 1.0);
        assert_eq!(rows[7], 2.0);
        assert_eq!(rows[11], 3.0);
        assert_eq!(Transform::from_row_major(&rows), t);
    }

    #[test]
    fn test_homogeneous_keeps_w() {
        #[rustfmt::skip]
        let rows = [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, -1.0, 0.0,
        ];
        let h = Transform::from_row_major(&rows).apply_homogeneous(&Point3D::new(1.0, 2.0, -4.0));
        assert_eq!(h, [1.0, 2.0, -4.0, 4.0]);
    }

    #[test]
    fn test_tolerance_points_equal() {
        let tol = Tolerance::DEFAULT;
        let a = Point3D::new(1.0, 2.0, 3.0);
        assert!(tol.points_equal(&a, &Point3D::new(1.0 + 1e-12, 2.0, 3.0)));
        assert!(!tol.points_equal(&a, &Point3D::new(1.001, 2.0, 3.0)));
        assert!(tol.is_zero(-1e-11));
    }

    #[test]
    fn test_angle_conversion() {
        assert!((degrees_to_radians(180.0) - PI).abs() < 1e-12);
        assert!((radians_to_degrees(PI) - 180.0).abs() < 1e-12);
    }
}
