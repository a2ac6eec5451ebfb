#![warn(missing_docs)]

//! Camera projection and SVG output for geocore scenes.
//!
//! This crate turns 3D primitives into a flat SVG drawing:
//!
//! - [`Camera`] - immutable look-at camera with a perspective or
//!   orthographic projection, matrices computed once at construction
//! - [`projection`] - NDC to pixel mapping and the full world-to-screen path
//! - [`SvgRenderer`] - accumulates projected [`DrawCommand`]s and serializes
//!   them in insertion order
//!
//! Matrices are exchanged as `[f64; 16]` in row-major order and applied to
//! column vectors, so the world-to-clip transform is `projection * view`.
//!
//! # Example
//!
//! ```
//! use geocore_primitives::{Point3D, Sphere, Vector3D};
//! use geocore_svg::{Camera, SvgRenderer};
//!
//! let camera = Camera::perspective(
//!     Point3D::new(0.0, 0.0, 10.0),
//!     Point3D::origin(),
//!     Vector3D::unit_y(),
//!     60.0,
//!     1.0,
//!     0.1,
//!     100.0,
//! )
//! .unwrap();
//!
//! let mut renderer = SvgRenderer::new(400, 400, camera);
//! renderer.set_background("#ffffff");
//! renderer.add_sphere(&Sphere::new(Point3D::origin(), 1.0).unwrap(), "blue", 2.0);
//!
//! let svg = renderer.to_svg_string();
//! assert!(svg.contains("<circle"));
//! ```

mod camera;
pub mod projection;
mod renderer;

pub use camera::{Camera, ProjectionKind, ORTHO_FAR, ORTHO_NEAR};
pub use projection::Point2D;
pub use renderer::{DrawCommand, Style, SvgRenderer};
