#![warn(missing_docs)]

//! Ray casting against geocore primitives.
//!
//! - [`Ray`] - origin and non-zero direction, evaluated at any real `t`
//! - [`intersect`] - closed-form intersectors for spheres, planes, triangles
//!   and axis-aligned boxes
//!
//! A miss is always `None`. Hit parameters are reported with their sign, so
//! callers decide whether hits behind the origin count.
//!
//! # Example
//!
//! ```
//! use geocore_primitives::{Point3D, Sphere, Vector3D};
//! use geocore_raytrace::Ray;
//!
//! let ray = Ray::new(Point3D::new(-5.0, 0.0, 0.0), Vector3D::unit_x()).unwrap();
//! let sphere = Sphere::new(Point3D::origin(), 1.0).unwrap();
//!
//! let hit = ray.intersect_sphere(&sphere).unwrap();
//! assert_eq!((hit.t1, hit.t2), (4.0, 6.0));
//! ```

pub mod intersect;
mod ray;

pub use intersect::{AabbHit, PlaneHit, SphereHit, TriangleHit};
pub use ray::Ray;
