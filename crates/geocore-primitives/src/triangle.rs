//! Triangles and barycentric coordinates.

use geocore_math::{Point3D, Result, Vector3D, EPSILON};
use serde::{Deserialize, Serialize};

use crate::{Aabb, Plane};

/// Barycentric weights of a point relative to a triangle `(a, b, c)`:
/// `p = u*a + v*b + w*c` with `u + v + w = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Barycentric {
    /// Weight of vertex `a`.
    pub u: f64,
    /// Weight of vertex `b`.
    pub v: f64,
    /// Weight of vertex `c`.
    pub w: f64,
}

impl Barycentric {
    /// Weights as `[u, v, w]`.
    pub fn to_array(&self) -> [f64; 3] {
        [self.u, self.v, self.w]
    }

    /// True when every weight lies in `[-EPSILON, 1 + EPSILON]`.
    pub fn is_inside(&self) -> bool {
        let range = -EPSILON..=1.0 + EPSILON;
        range.contains(&self.u) && range.contains(&self.v) && range.contains(&self.w)
    }
}

/// A triangle with vertices `a`, `b`, `c`.
///
/// Collinear vertices are accepted; such a triangle has zero area, a zero
/// normal, no supporting plane, and contains no points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First vertex.
    pub a: Point3D,
    /// Second vertex.
    pub b: Point3D,
    /// Third vertex.
    pub c: Point3D,
}

impl Triangle {
    /// Create a triangle from three vertices.
    pub fn new(a: Point3D, b: Point3D, c: Point3D) -> Self {
        Self { a, b, c }
    }

    /// Vertices in order `[a, b, c]`.
    pub fn vertices(&self) -> [Point3D; 3] {
        [self.a, self.b, self.c]
    }

    #[inline]
    fn scaled_normal(&self) -> Vector3D {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    /// Unit normal following the `a → b → c` winding, or the zero vector
    /// for a degenerate triangle.
    pub fn normal(&self) -> Vector3D {
        self.scaled_normal().normalize().unwrap_or_else(|_| Vector3D::zero())
    }

    /// Area, `|(b - a) × (c - a)| / 2`.
    #[inline]
    pub fn area(&self) -> f64 {
        self.scaled_normal().magnitude() * 0.5
    }

    /// True when the vertices are collinear within [`EPSILON`].
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.scaled_normal().magnitude() < EPSILON
    }

    /// Vertex average `(a + b + c) / 3`.
    pub fn centroid(&self) -> Point3D {
        Point3D::new(
            (self.a.x + self.b.x + self.c.x) / 3.0,
            (self.a.y + self.b.y + self.c.y) / 3.0,
            (self.a.z + self.b.z + self.c.z) / 3.0,
        )
    }

    /// Supporting plane. Fails with `DegenerateInput` for collinear vertices.
    pub fn plane(&self) -> Result<Plane> {
        Plane::from_three_points(&self.a, &self.b, &self.c)
    }

    /// Tight bounding box of the three vertices.
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_point(self.a)
            .expand_by_point(&self.b)
            .expand_by_point(&self.c)
    }

    /// Barycentric coordinates of `point`.
    ///
    /// Solves the 2x2 Gram system over the edge vectors, so a point off the
    /// triangle's plane gets the coordinates of its orthogonal projection.
    /// A degenerate triangle yields `(1, 0, 0)`.
    pub fn barycentric_coords(&self, point: &Point3D) -> Barycentric {
        let v0 = self.b - self.a;
        let v1 = self.c - self.a;
        let v2 = *point - self.a;

        let d00 = v0.dot(&v0);
        let d01 = v0.dot(&v1);
        let d11 = v1.dot(&v1);
        let d20 = v2.dot(&v0);
        let d21 = v2.dot(&v1);

        let denom = d00 * d11 - d01 * d01;
        if denom.abs() < EPSILON * EPSILON {
            return Barycentric {
                u: 1.0,
                v: 0.0,
                w: 0.0,
            };
        }

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        Barycentric { u: 1.0 - v - w, v, w }
    }

    /// True when `point` lies in the triangle's plane and inside its edges
    /// (boundary inclusive, within [`EPSILON`]).
    pub fn contains_point(&self, point: &Point3D) -> bool {
        match self.plane() {
            Ok(plane) if plane.contains_point(point) => {
                self.barycentric_coords(point).is_inside()
            }
            _ => false,
        }
    }
}
