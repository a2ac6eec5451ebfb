#![warn(missing_docs)]

//! Primitive shapes for the geocore kernel.
//!
//! Every shape is a `Copy` value built from [`Point3D`]s and [`Vector3D`]s:
//!
//! - [`LineSegment`] - two endpoints, possibly coincident
//! - [`Plane`] - unit normal and offset, `normal · p + d = 0`
//! - [`Triangle`] - three vertices, possibly collinear
//! - [`Sphere`] - center and strictly positive radius
//! - [`Aabb`] - axis-aligned box with `min <= max` per axis
//!
//! Degenerate segments and triangles are valid values with zero length or
//! area; only queries that need a direction or a supporting plane fail.

mod aabb;
mod distance;
mod line_segment;
mod plane;
mod sphere;
mod transform;
mod triangle;

pub use aabb::Aabb;
pub use distance::{chebyshev_distance, manhattan_distance};
pub use line_segment::LineSegment;
pub use plane::Plane;
pub use sphere::Sphere;
pub use transform::Transformable;
pub use triangle::{Barycentric, Triangle};

pub use geocore_math::{GeometryError, Point3D, Result, Vector3D, EPSILON};
