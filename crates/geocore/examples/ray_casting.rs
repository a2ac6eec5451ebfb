//! Casts a grid of rays at a small scene and prints an ASCII depth map.
//!
//! Run with `cargo run -p geocore --example ray_casting`.

use geocore::{Aabb, Plane, Point3D, Ray, Result, Sphere, Triangle, Vector3D};

const COLUMNS: usize = 60;
const ROWS: usize = 24;

fn main() -> Result<()> {
    let sphere = Sphere::new(Point3D::new(-1.5, 0.0, 0.0), 1.0)?;
    let bbox = Aabb::new(Point3D::new(0.5, -0.75, -0.75), Point3D::new(2.0, 0.75, 0.75))?;
    let triangle = Triangle::new(
        Point3D::new(-3.0, -1.5, -2.0),
        Point3D::new(3.0, -1.5, -2.0),
        Point3D::new(0.0, 2.0, -2.0),
    );
    let floor = Plane::from_point_normal(&Point3D::new(0.0, -1.5, 0.0), &Vector3D::unit_y())?;

    let eye = Point3D::new(0.0, 0.0, 6.0);
    let mut hits = 0;
    for row in 0..ROWS {
        let mut line = String::with_capacity(COLUMNS);
        for col in 0..COLUMNS {
            let x = (col as f64 / COLUMNS as f64 - 0.5) * 8.0;
            let y = (0.5 - row as f64 / ROWS as f64) * 4.0;
            let ray = Ray::new(eye, Vector3D::new(x, y, -6.0))?.normalized();

            let nearest = [
                ray.intersect_sphere(&sphere).and_then(|h| h.nearest_non_negative()),
                ray.intersect_aabb(&bbox).map(|h| h.t_min).filter(|t| *t >= 0.0),
                ray.intersect_triangle(&triangle).map(|h| h.t).filter(|t| *t >= 0.0),
                ray.intersect_plane(&floor).map(|h| h.t).filter(|t| *t >= 0.0),
            ]
            .into_iter()
            .flatten()
            .fold(f64::INFINITY, f64::min);

            line.push(match nearest {
                t if t < 5.5 => '#',
                t if t < 7.0 => '+',
                t if t < 9.0 => '.',
                t if t.is_finite() => '-',
                _ => ' ',
            });
            if nearest.is_finite() {
                hits += 1;
            }
        }
        println!("{line}");
    }
    println!("{hits} of {} rays hit the scene", ROWS * COLUMNS);
    Ok(())
}
