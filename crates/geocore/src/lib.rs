#![warn(missing_docs)]

//! 3D computational geometry kernel with ray casting and SVG rendering.
//!
//! Re-exports the kernel crates and flattens their main types:
//!
//! - [`geocore_math`] - points, vectors, tolerances, 4x4 transforms, errors
//! - [`geocore_primitives`] - segments, planes, triangles, spheres, boxes
//! - [`geocore_raytrace`] - rays and closed-form intersectors
//! - [`geocore_svg`] - cameras and the SVG scene renderer
//!
//! # Example
//!
//! ```
//! use geocore::{Camera, Point3D, Ray, Sphere, SvgRenderer, Vector3D};
//!
//! let sphere = Sphere::new(Point3D::origin(), 1.0).unwrap();
//! let ray = Ray::new(Point3D::new(-5.0, 0.0, 0.0), Vector3D::unit_x()).unwrap();
//! let hit = ray.intersect_sphere(&sphere).unwrap();
//! assert_eq!(hit.nearest_non_negative(), Some(4.0));
//!
//! let camera = Camera::orthographic(
//!     Point3D::new(0.0, 0.0, 5.0),
//!     Point3D::origin(),
//!     Vector3D::unit_y(),
//!     4.0,
//!     4.0,
//! )
//! .unwrap();
//! let mut renderer = SvgRenderer::new(200, 200, camera);
//! renderer.add_sphere(&sphere, "black", 1.0);
//! renderer.add_point(&ray.point_at(hit.t1), "red", 3.0);
//! assert_eq!(renderer.len(), 2);
//! ```

pub use geocore_math;
pub use geocore_primitives;
pub use geocore_raytrace;
pub use geocore_svg;

pub use geocore_math::{
    degrees_to_radians, radians_to_degrees, GeometryError, Point3D, Result, Tolerance, Transform,
    Vector3D, EPSILON,
};
pub use geocore_primitives::{
    chebyshev_distance, manhattan_distance, Aabb, Barycentric, LineSegment, Plane, Sphere,
    Transformable, Triangle,
};
pub use geocore_raytrace::{intersect, AabbHit, PlaneHit, Ray, SphereHit, TriangleHit};
pub use geocore_svg::{
    projection, Camera, DrawCommand, Point2D, ProjectionKind, Style, SvgRenderer, ORTHO_FAR,
    ORTHO_NEAR,
};
