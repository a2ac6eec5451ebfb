//! Distance metrics other than Euclidean.
//!
//! Euclidean distance lives on [`Point3D::distance_to`].

use geocore_math::Point3D;

/// L1 distance: sum of the absolute coordinate differences.
pub fn manhattan_distance(a: &Point3D, b: &Point3D) -> f64 {
    (a.x - b.x).abs() + (a.y - b.y).abs() + (a.z - b.z).abs()
}

/// L∞ distance: largest absolute coordinate difference.
pub fn chebyshev_distance(a: &Point3D, b: &Point3D) -> f64 {
    (a.x - b.x).abs().max((a.y - b.y).abs()).max((a.z - b.z).abs())
}
