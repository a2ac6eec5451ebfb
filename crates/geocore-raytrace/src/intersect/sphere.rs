//! Ray-sphere intersection (quadratic equation).

use geocore_primitives::Sphere;

use super::SphereHit;
use crate::Ray;

/// Intersect a ray with a sphere.
///
/// Returns both roots of `|o + t*d - c|² = r²` sorted so that `t1 <= t2`,
/// whatever their sign, or `None` when the ray misses.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<SphereHit> {
    let oc = ray.origin - sphere.center;
    let d = ray.direction;

    let a = d.dot(&d);
    let b = 2.0 * oc.dot(&d);
    let c = oc.dot(&oc) - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);

    Some(SphereHit { t1, t2 })
}
