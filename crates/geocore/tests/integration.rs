//! End-to-end checks across the kernel crates.

use approx::assert_relative_eq;
use geocore::*;

fn sample_points() -> Vec<Point3D> {
    vec![
        Point3D::origin(),
        Point3D::new(1.0, 2.0, 3.0),
        Point3D::new(-4.5, 0.25, 7.0),
        Point3D::new(1e3, -1e-3, 0.5),
        Point3D::new(-0.0, 3.0, -3.0),
    ]
}

fn sample_vectors() -> Vec<Vector3D> {
    vec![
        Vector3D::new(1.0, 0.0, 0.0),
        Vector3D::new(3.0, 4.0, 0.0),
        Vector3D::new(-1.5, 2.0, 0.5),
        Vector3D::new(0.0, -7.0, 2.0),
        Vector3D::new(1e-3, 1e3, -1.0),
    ]
}

#[test]
fn distance_is_symmetric_and_non_negative() {
    let points = sample_points();
    for a in &points {
        for b in &points {
            let d = a.distance_to(b);
            assert!(d >= 0.0);
            assert_eq!(d, b.distance_to(a));
            assert_eq!(manhattan_distance(a, b), manhattan_distance(b, a));
            assert_eq!(chebyshev_distance(a, b), chebyshev_distance(b, a));
        }
        assert_eq!(a.distance_to(a), 0.0);
    }
}

#[test]
fn normalize_yields_unit_vectors() {
    for v in sample_vectors() {
        let n = v.normalize().unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        assert!(n.is_parallel(&v));
    }
    assert!(matches!(
        Vector3D::zero().normalize(),
        Err(GeometryError::DegenerateInput(_))
    ));
}

#[test]
fn cross_product_is_orthogonal_to_operands() {
    let vectors = sample_vectors();
    for a in &vectors {
        for b in &vectors {
            let c = a.cross(b);
            let scale = a.magnitude() * b.magnitude() * c.magnitude().max(1.0);
            assert!(c.dot(a).abs() <= 1e-12 * scale.max(1.0));
            assert!(c.dot(b).abs() <= 1e-12 * scale.max(1.0));
        }
    }
}

#[test]
fn arrays_round_trip_exactly() {
    for p in sample_points() {
        assert_eq!(Point3D::from_array(p.to_array()), p);
    }
    for v in sample_vectors() {
        assert_eq!(Vector3D::from_array(v.to_array()), v);
    }
}

#[test]
fn primitive_metrics() {
    let sphere = Sphere::new(Point3D::origin(), 1.0).unwrap();
    assert_relative_eq!(sphere.volume(), 4.18879, epsilon = 1e-4);

    let triangle = Triangle::new(
        Point3D::origin(),
        Point3D::new(2.0, 0.0, 0.0),
        Point3D::new(0.0, 2.0, 0.0),
    );
    assert_eq!(triangle.area(), 2.0);
    assert_relative_eq!(triangle.centroid().x, 2.0 / 3.0, epsilon = 1e-12);

    let right = Triangle::new(
        Point3D::origin(),
        Point3D::new(3.0, 0.0, 0.0),
        Point3D::new(0.0, 3.0, 0.0),
    );
    assert_eq!(right.centroid(), Point3D::new(1.0, 1.0, 0.0));

    let segment = LineSegment::new(Point3D::origin(), Point3D::new(3.0, 4.0, 0.0));
    assert_eq!(segment.length(), 5.0);
    let diagonal = LineSegment::new(Point3D::origin(), Point3D::new(2.0, 2.0, 2.0));
    assert_eq!(diagonal.midpoint(), Point3D::new(1.0, 1.0, 1.0));

    let bbox = Aabb::new(Point3D::origin(), Point3D::new(2.0, 3.0, 4.0)).unwrap();
    assert_eq!(bbox.volume(), 24.0);
}

#[test]
fn plane_through_three_points_contains_them() {
    let p1 = Point3D::new(1.0, 0.0, 0.0);
    let p2 = Point3D::new(0.0, 1.0, 0.0);
    let p3 = Point3D::new(0.0, 0.0, 1.0);
    let plane = Plane::from_three_points(&p1, &p2, &p3).unwrap();
    for p in [p1, p2, p3] {
        assert!(plane.contains_point(&p));
    }
    let expected = 1.0 / 3.0_f64.sqrt();
    for c in plane.normal.to_array() {
        assert_relative_eq!(c, expected, epsilon = 1e-12);
    }
}

#[test]
fn aabb_overlap_cases() {
    let a = Aabb::new(Point3D::origin(), Point3D::new(1.0, 1.0, 1.0)).unwrap();
    let b = Aabb::new(Point3D::new(0.5, 0.5, 0.5), Point3D::new(1.5, 1.5, 1.5)).unwrap();
    let c = Aabb::new(Point3D::new(2.0, 0.0, 0.0), Point3D::new(3.0, 1.0, 1.0)).unwrap();
    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
    assert!(a.union(&c).contains_point(&Point3D::new(1.5, 0.5, 0.5)));
}

#[test]
fn ray_casts_against_every_primitive() {
    let ray = Ray::new(Point3D::new(-5.0, 0.0, 0.0), Vector3D::new(1.0, 0.0, 0.0)).unwrap();

    let sphere = Sphere::new(Point3D::origin(), 1.0).unwrap();
    let hit = ray.intersect_sphere(&sphere).unwrap();
    assert_relative_eq!(hit.t1, 4.0, epsilon = 1e-10);
    assert_relative_eq!(hit.t2, 6.0, epsilon = 1e-10);

    let plane = Plane::from_point_normal(&Point3D::new(2.0, 0.0, 0.0), &Vector3D::unit_x()).unwrap();
    let plane_hit = ray.intersect_plane(&plane).unwrap();
    assert_relative_eq!(plane_hit.t, 7.0, epsilon = 1e-10);

    let triangle = Triangle::new(
        Point3D::new(0.0, -1.0, -1.0),
        Point3D::new(0.0, 1.0, -1.0),
        Point3D::new(0.0, 0.0, 1.0),
    );
    let tri_hit = ray.intersect_triangle(&triangle).unwrap();
    assert_relative_eq!(tri_hit.t, 5.0, epsilon = 1e-10);
    assert!(tri_hit.point.approx_eq(&Point3D::origin(), &Tolerance::DEFAULT));

    let bbox = Aabb::new(Point3D::new(-1.0, -1.0, -1.0), Point3D::new(1.0, 1.0, 1.0)).unwrap();
    let box_hit = ray.intersect_aabb(&bbox).unwrap();
    assert_relative_eq!(box_hit.t_min, 4.0, epsilon = 1e-10);
    assert_relative_eq!(box_hit.t_max, 6.0, epsilon = 1e-10);

    // Box and sphere entry agree with the box enclosing the sphere
    assert!(box_hit.t_min <= hit.t1);
}

#[test]
fn transformed_shapes_stay_consistent_with_queries() {
    let sphere = Sphere::new(Point3D::origin(), 1.0).unwrap();
    let moved = sphere
        .translate(&Vector3D::new(10.0, 0.0, 0.0))
        .scale(&Point3D::new(10.0, 0.0, 0.0), 2.0)
        .unwrap();
    let ray = Ray::new(Point3D::origin(), Vector3D::unit_x()).unwrap();
    let hit = ray.intersect_sphere(&moved).unwrap();
    assert_relative_eq!(hit.t1, 8.0, epsilon = 1e-10);
    assert_relative_eq!(hit.t2, 12.0, epsilon = 1e-10);

    let bbox = moved.bounding_box();
    assert!(bbox.contains_point(&Point3D::new(12.0, 0.0, 0.0)));
}

#[test]
fn cameras_produce_finite_matrices() {
    let perspective = Camera::perspective(
        Point3D::new(5.0, 5.0, 5.0),
        Point3D::origin(),
        Vector3D::unit_y(),
        60.0,
        16.0 / 9.0,
        0.1,
        100.0,
    )
    .unwrap();
    let orthographic = Camera::orthographic(
        Point3D::new(5.0, 5.0, 5.0),
        Point3D::origin(),
        Vector3D::unit_y(),
        10.0,
        10.0,
    )
    .unwrap();
    for camera in [&perspective, &orthographic] {
        let view = camera.view_matrix();
        let projection = camera.projection_matrix();
        assert_eq!(view.len() + projection.len(), 32);
        assert!(view.iter().chain(projection.iter()).all(|v| v.is_finite()));
    }
}

#[test]
fn render_full_scene() {
    let camera = Camera::perspective(
        Point3D::new(5.0, 5.0, 5.0),
        Point3D::origin(),
        Vector3D::unit_y(),
        60.0,
        1.0,
        0.1,
        100.0,
    )
    .unwrap();
    let mut renderer = SvgRenderer::new(800, 800, camera);
    renderer.set_background("#ffffff");

    let sphere = Sphere::new(Point3D::origin(), 1.0).unwrap();
    renderer.add_sphere(&sphere, "#3366cc", 2.0);
    renderer.add_aabb(&sphere.bounding_box(), "#999999", 1.0);
    renderer.add_triangle(
        &Triangle::new(
            Point3D::new(2.0, 0.0, 0.0),
            Point3D::new(0.0, 2.0, 0.0),
            Point3D::new(0.0, 0.0, 2.0),
        ),
        "black",
        None,
        1.0,
    );
    renderer.add_line_segment(
        &LineSegment::new(Point3D::origin(), Point3D::new(3.0, 0.0, 0.0)),
        "red",
        1.0,
    );
    renderer.add_point(&Point3D::new(3.0, 0.0, 0.0), "red", 4.0);

    let svg = renderer.to_svg_string();
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains("#ffffff"));
    assert!(svg.contains("<rect"));
    assert!(svg.contains("fill=\"none\""));
    assert_eq!(svg.matches("<circle").count(), 2);
    assert_eq!(svg.matches("<line").count(), 13);
    assert_eq!(svg.matches("<polygon").count(), 1);
    assert!(svg.contains("stroke=\"#3366cc\""));
    assert_eq!(renderer.len(), 5);
}

#[test]
fn shape_transforms_match_matrix_transforms() {
    let center = Point3D::new(1.0, -2.0, 0.5);
    let offset = Vector3D::new(3.0, 0.0, -1.0);
    let triangle = Triangle::new(
        Point3D::origin(),
        Point3D::new(2.0, 0.0, 0.0),
        Point3D::new(0.0, 2.0, 0.0),
    );

    let by_matrix = Transform::scaling_about(&center, 1.5).then(&Transform::translation(&offset));
    let by_shape = triangle.translate(&offset).scale(&center, 1.5).unwrap();
    let pairs = [
        (by_shape.a, triangle.a),
        (by_shape.b, triangle.b),
        (by_shape.c, triangle.c),
    ];
    for (shape, vertex) in pairs {
        assert!(shape.approx_eq(&by_matrix.apply_point(&vertex), &Tolerance::DEFAULT));
    }
    assert_relative_eq!(by_shape.area(), triangle.area() * 2.25, epsilon = 1e-12);
}

#[test]
fn non_finite_inputs_never_reach_the_renderer() {
    let nan = Point3D::new(f64::NAN, 0.0, 0.0);
    let camera = Camera::perspective(
        nan,
        Point3D::origin(),
        Vector3D::unit_y(),
        60.0,
        1.0,
        0.1,
        100.0,
    );
    assert!(camera.is_err());
    assert!(Sphere::new(Point3D::origin(), f64::INFINITY).is_err());
    assert!(Ray::new(Point3D::origin(), Vector3D::new(f64::NAN, 0.0, 0.0)).is_err());
    assert!(Aabb::new(nan, Point3D::new(1.0, 1.0, 1.0)).is_err());
    assert!(Vector3D::new(f64::INFINITY, 0.0, 0.0).normalize().is_err());
}
