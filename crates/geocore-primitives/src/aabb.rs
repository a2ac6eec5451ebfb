//! Axis-aligned bounding boxes.

use geocore_math::{GeometryError, Point3D, Result, Vector3D};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in 3D.
///
/// Boundaries are inclusive. A box may have zero extent on any axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3D,
    /// Maximum corner.
    pub max: Point3D,
}

impl Aabb {
    /// The 12 box edges as index pairs into [`Aabb::corners`]:
    /// bottom ring, top ring, then the four verticals.
    pub const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];

    /// Create a box from its corners. The corners are never reordered;
    /// fails with `InvalidArgument` if `min > max` on any axis or a corner
    /// is not finite.
    pub fn new(min: Point3D, max: Point3D) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GeometryError::invalid(format!(
                "aabb corners must be finite, got {:?} and {:?}",
                min.to_array(),
                max.to_array()
            )));
        }
        if min.x > max.x || min.y > max.y || min.z > max.z {
            return Err(GeometryError::invalid(format!(
                "aabb min {:?} exceeds max {:?}",
                min.to_array(),
                max.to_array()
            )));
        }
        Ok(Self { min, max })
    }

    /// Zero-extent box at a single point.
    pub fn from_point(point: Point3D) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Tight box around a set of points. Fails with `InvalidArgument` when empty.
    pub fn from_points(points: &[Point3D]) -> Result<Self> {
        let (first, rest) = points
            .split_first()
            .ok_or_else(|| GeometryError::invalid("cannot bound an empty point set"))?;
        Ok(rest
            .iter()
            .fold(Self::from_point(*first), |acc, p| acc.expand_by_point(p)))
    }

    /// Box center.
    #[inline]
    pub fn center(&self) -> Point3D {
        self.min.midpoint(&self.max)
    }

    /// Extent along each axis, `max - min`.
    #[inline]
    pub fn size(&self) -> Vector3D {
        self.max - self.min
    }

    /// Enclosed volume; 0 when flat on any axis.
    #[inline]
    pub fn volume(&self) -> f64 {
        let s = self.size();
        s.x * s.y * s.z
    }

    /// Total area of the six faces.
    #[inline]
    pub fn surface_area(&self) -> f64 {
        let s = self.size();
        2.0 * (s.x * s.y + s.y * s.z + s.z * s.x)
    }

    /// Length of the main diagonal.
    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.size().magnitude()
    }

    /// True when `point` lies inside or on the boundary.
    pub fn contains_point(&self, point: &Point3D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Test if two boxes overlap (touching counts as overlap).
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Aabb) -> Aabb {
        self.expand_by_point(&other.min).expand_by_point(&other.max)
    }

    /// Smallest box containing `self` and `point`.
    pub fn expand_by_point(&self, point: &Point3D) -> Aabb {
        Aabb {
            min: Point3D::new(
                self.min.x.min(point.x),
                self.min.y.min(point.y),
                self.min.z.min(point.z),
            ),
            max: Point3D::new(
                self.max.x.max(point.x),
                self.max.y.max(point.y),
                self.max.z.max(point.z),
            ),
        }
    }

    /// Grow every face outward by `amount`. A negative amount shrinks the
    /// box and may leave `min > max`; the result is not corrected.
    pub fn expand_by_scalar(&self, amount: f64) -> Aabb {
        let delta = Vector3D::new(amount, amount, amount);
        Aabb {
            min: self.min - delta,
            max: self.max + delta,
        }
    }

    /// True when `min <= max` on every axis.
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// The eight corners: the `min.z` face counter-clockwise from `min`,
    /// then the `max.z` face in the same order.
    pub fn corners(&self) -> [Point3D; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Point3D::new(lo.x, lo.y, lo.z),
            Point3D::new(hi.x, lo.y, lo.z),
            Point3D::new(hi.x, hi.y, lo.z),
            Point3D::new(lo.x, hi.y, lo.z),
            Point3D::new(lo.x, lo.y, hi.z),
            Point3D::new(hi.x, lo.y, hi.z),
            Point3D::new(hi.x, hi.y, hi.z),
            Point3D::new(lo.x, hi.y, hi.z),
        ]
    }

    /// The 12 edges as index pairs into [`Aabb::corners`].
    pub fn edges(&self) -> [(usize, usize); 12] {
        Self::EDGES
    }

    /// The 12 edges as corner pairs, in [`Aabb::EDGES`] order.
    pub fn edge_points(&self) -> [(Point3D, Point3D); 12] {
        let corners = self.corners();
        Self::EDGES.map(|(i, j)| (corners[i], corners[j]))
    }
}
