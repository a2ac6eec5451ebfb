//! Ray-plane intersection (closed-form).

use geocore_math::EPSILON;
use geocore_primitives::Plane;

use super::PlaneHit;
use crate::Ray;

/// Intersect a ray with a plane.
///
/// Returns `None` when the ray is parallel to the plane. Hits behind the
/// origin are reported with a negative `t`.
pub fn intersect_plane(ray: &Ray, plane: &Plane) -> Option<PlaneHit> {
    let denom = ray.direction.dot(&plane.normal);

    // Ray is parallel to plane
    if denom.abs() < EPSILON {
        return None;
    }

    let t = -(plane.normal.dot(&ray.origin.to_vector()) + plane.d) / denom;
    Some(PlaneHit {
        t,
        point: ray.point_at(t),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use geocore_math::{Point3D, Vector3D};

    fn xy_plane() -> Plane {
        Plane::from_point_normal(&Point3D::origin(), &Vector3D::unit_z()).unwrap()
    }

    #[test]
    fn test_ray_plane_perpendicular() {
        let ray = Ray::new(Point3D::new(0.0, 0.0, 5.0), Vector3D::new(0.0, 0.0, -1.0)).unwrap();
        let hit = intersect_plane(&ray, &xy_plane()).unwrap();
        assert!((hit.t - 5.0).abs() < 1e-10);
        assert!(hit.point.x.abs() < 1e-10);
        assert!(hit.point.z.abs() < 1e-10);
    }

    #[test]
    fn test_ray_plane_offset() {
        let ray = Ray::new(Point3D::new(3.0, 4.0, 10.0), Vector3D::new(0.0, 0.0, -1.0)).unwrap();
        let hit = intersect_plane(&ray, &xy_plane()).unwrap();
        assert!((hit.t - 10.0).abs() < 1e-10);
        assert!((hit.point.x - 3.0).abs() < 1e-10);
        assert!((hit.point.y - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_plane_parallel() {
        let ray = Ray::new(Point3D::new(0.0, 0.0, 5.0), Vector3D::new(1.0, 0.0, 0.0)).unwrap();
        assert!(intersect_plane(&ray, &xy_plane()).is_none());
    }

    #[test]
    fn test_ray_lying_in_plane() {
        let along_x = Ray::new(Point3D::origin(), Vector3D::new(1.0, 0.0, 0.0)).unwrap();
        assert!(intersect_plane(&along_x, &xy_plane()).is_none());

        let diagonal = Ray::new(Point3D::new(3.0, -2.0, 0.0), Vector3D::new(1.0, 1.0, 0.0)).unwrap();
        assert!(intersect_plane(&diagonal, &xy_plane()).is_none());
    }

    #[test]
    fn test_ray_plane_behind_origin() {
        let ray = Ray::new(Point3D::new(0.0, 0.0, 5.0), Vector3D::new(0.0, 0.0, 1.0)).unwrap();
        let hit = intersect_plane(&ray, &xy_plane()).unwrap();
        assert!((hit.t + 5.0).abs() < 1e-10);
        assert!(hit.point.z.abs() < 1e-10);
    }

    #[test]
    fn test_ray_plane_oblique() {
        let plane = Plane::new(Vector3D::unit_y(), -2.0).unwrap();
        let ray = Ray::new(Point3D::origin(), Vector3D::new(1.0, 1.0, 0.0)).unwrap();
        let hit = intersect_plane(&ray, &plane).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-10);
        assert!((hit.point.x - 2.0).abs() < 1e-10);
        assert!((hit.point.y - 2.0).abs() < 1e-10);
    }
}
