//! Renders a small scene to `scene.svg` in the working directory.
//!
//! Run with `cargo run -p geocore --example svg_scene`.

use std::error::Error;

use geocore::{
    Aabb, Camera, LineSegment, Point3D, Sphere, SvgRenderer, Transformable, Triangle, Vector3D,
};

fn main() -> Result<(), Box<dyn Error>> {
    let camera = Camera::perspective(
        Point3D::new(6.0, 4.0, 8.0),
        Point3D::origin(),
        Vector3D::unit_y(),
        50.0,
        4.0 / 3.0,
        0.1,
        100.0,
    )?;
    let mut renderer = SvgRenderer::new(800, 600, camera);
    renderer.set_background("#fdfdfd");

    // Axes
    let origin = Point3D::origin();
    for (axis, color) in [
        (Vector3D::unit_x(), "#d62728"),
        (Vector3D::unit_y(), "#2ca02c"),
        (Vector3D::unit_z(), "#1f77b4"),
    ] {
        renderer.add_line_segment(&LineSegment::new(origin, origin + axis * 3.0), color, 2.0);
    }

    let sphere = Sphere::new(Point3D::new(0.0, 1.0, 0.0), 1.0)?;
    renderer.add_sphere(&sphere, "#444444", 1.5);
    renderer.add_aabb(&sphere.bounding_box(), "#bbbbbb", 1.0);

    let base = Triangle::new(
        Point3D::new(-2.0, 0.0, -2.0),
        Point3D::new(2.0, 0.0, -2.0),
        Point3D::new(0.0, 0.0, 2.0),
    );
    renderer.add_triangle(&base, "#333333", Some("#ffe08a"), 1.0);

    let crate_box = Aabb::new(Point3D::new(1.5, 0.0, 1.0), Point3D::new(2.5, 1.0, 2.0))?;
    renderer.add_aabb(&crate_box, "#8c564b", 1.5);
    renderer.add_aabb(&crate_box.translate(&Vector3D::new(0.0, 1.0, 0.0)), "#8c564b", 1.0);

    for corner in crate_box.corners() {
        renderer.add_point(&corner, "#8c564b", 3.0);
    }

    renderer.save("scene.svg")?;
    println!("wrote scene.svg with {} draw commands", renderer.len());
    Ok(())
}
