//! Ray-triangle intersection via the supporting plane.

use geocore_primitives::Triangle;

use super::{intersect_plane, TriangleHit};
use crate::Ray;

/// Intersect a ray with a triangle.
///
/// Hits the triangle's plane first, then accepts the point when its
/// barycentric coordinates lie within `[-EPSILON, 1 + EPSILON]`. Degenerate
/// triangles and rays parallel to the plane never hit. `t` keeps its sign.
pub fn intersect_triangle(ray: &Ray, triangle: &Triangle) -> Option<TriangleHit> {
    let plane = triangle.plane().ok()?;
    let hit = intersect_plane(ray, &plane)?;

    let barycentric = triangle.barycentric_coords(&hit.point);
    if !barycentric.is_inside() {
        return None;
    }

    Some(TriangleHit {
        t: hit.t,
        point: hit.point,
        barycentric,
    })
}
