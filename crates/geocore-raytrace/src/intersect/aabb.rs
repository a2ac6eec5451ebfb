//! Ray-box intersection using the slab method.

use geocore_math::EPSILON;
use geocore_primitives::Aabb;

use super::AabbHit;
use crate::Ray;

/// Intersect a ray with an axis-aligned box.
///
/// Returns the entry and exit parameters when the ray crosses the box and
/// the exit is not behind the origin. A ray parallel to a slab misses unless
/// its origin lies within that slab.
pub fn intersect_aabb(ray: &Ray, aabb: &Aabb) -> Option<AabbHit> {
    let origin = ray.origin.to_array();
    let direction = ray.direction.to_array();
    let lo = aabb.min.to_array();
    let hi = aabb.max.to_array();

    let mut t_min = f64::NEG_INFINITY;
    let mut t_max = f64::INFINITY;

    for axis in 0..3 {
        if direction[axis].abs() < EPSILON {
            if origin[axis] < lo[axis] || origin[axis] > hi[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / direction[axis];
        let t0 = (lo[axis] - origin[axis]) * inv;
        let t1 = (hi[axis] - origin[axis]) * inv;
        let (near, far) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };

        t_min = t_min.max(near);
        t_max = t_max.min(far);
        if t_min > t_max {
            return None;
        }
    }

    if t_max < 0.0 {
        return None;
    }
    Some(AabbHit { t_min, t_max })
}
