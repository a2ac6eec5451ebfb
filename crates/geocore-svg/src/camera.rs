//! Look-at cameras with perspective or orthographic projection.

use geocore_math::{GeometryError, Point3D, Result, Transform, Vector3D, EPSILON};
use serde::{Deserialize, Serialize};

/// Near clip distance used by orthographic cameras.
pub const ORTHO_NEAR: f64 = 0.01;

/// Far clip distance used by orthographic cameras.
pub const ORTHO_FAR: f64 = 1000.0;

/// Projection parameters of a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Symmetric-frustum perspective projection.
    Perspective {
        /// Vertical field of view in degrees, in `(0, 180)`.
        fov_degrees: f64,
        /// Width / height ratio of the image plane.
        aspect: f64,
        /// Near clip distance.
        near: f64,
        /// Far clip distance.
        far: f64,
    },
    /// Parallel projection of a centered `width × height` box.
    Orthographic {
        /// Visible width in world units.
        width: f64,
        /// Visible height in world units.
        height: f64,
    },
}

/// An immutable camera.
///
/// The orthonormal basis and both matrices are computed once by the
/// constructors; building a camera with different parameters means
/// constructing a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Point3D,
    target: Point3D,
    up: Vector3D,
    kind: ProjectionKind,
    forward: Vector3D,
    right: Vector3D,
    true_up: Vector3D,
    view: Transform,
    projection: Transform,
}

struct Basis {
    forward: Vector3D,
    right: Vector3D,
    true_up: Vector3D,
}

impl Camera {
    /// Perspective camera at `position` looking at `target`.
    ///
    /// Fails with `InvalidArgument` when the look-at basis is degenerate
    /// (`position == target`, zero `up`, or `up` parallel to the view
    /// direction, or a non-finite position, target or `up`), when
    /// `near`/`far` are not positive or `near >= far`,
    /// when `aspect <= 0`, or when `fov_degrees` is outside `(0, 180)`.
    pub fn perspective(
        position: Point3D,
        target: Point3D,
        up: Vector3D,
        fov_degrees: f64,
        aspect: f64,
        near: f64,
        far: f64,
    ) -> Result<Self> {
        if !(fov_degrees.is_finite() && fov_degrees > 0.0 && fov_degrees < 180.0) {
            return Err(GeometryError::invalid(format!(
                "field of view must be in (0, 180) degrees, got {fov_degrees}"
            )));
        }
        positive("aspect", aspect)?;
        positive("near", near)?;
        positive("far", far)?;
        if near >= far {
            return Err(GeometryError::invalid(format!(
                "near ({near}) must be less than far ({far})"
            )));
        }

        let kind = ProjectionKind::Perspective {
            fov_degrees,
            aspect,
            near,
            far,
        };
        let projection = perspective_matrix(fov_degrees, aspect, near, far);
        Self::build(position, target, up, kind, projection)
    }

    /// Orthographic camera at `position` looking at `target`, showing a
    /// `width × height` box centered on the view axis between
    /// [`ORTHO_NEAR`] and [`ORTHO_FAR`].
    ///
    /// Fails with `InvalidArgument` on a degenerate look-at basis or when
    /// `width`/`height` are not positive.
    pub fn orthographic(
        position: Point3D,
        target: Point3D,
        up: Vector3D,
        width: f64,
        height: f64,
    ) -> Result<Self> {
        positive("width", width)?;
        positive("height", height)?;
        let kind = ProjectionKind::Orthographic { width, height };
        Self::build(position, target, up, kind, orthographic_matrix(width, height))
    }

    fn build(
        position: Point3D,
        target: Point3D,
        up: Vector3D,
        kind: ProjectionKind,
        projection: Transform,
    ) -> Result<Self> {
        let basis = look_at_basis(&position, &target, &up)?;
        let view = view_matrix(&position, &basis);
        tracing::debug!(?kind, eye = ?position.to_array(), "camera constructed");
        Ok(Self {
            position,
            target,
            up,
            kind,
            forward: basis.forward,
            right: basis.right,
            true_up: basis.true_up,
            view,
            projection,
        })
    }

    /// Eye position.
    pub fn position(&self) -> Point3D {
        self.position
    }

    /// Look-at target.
    pub fn target(&self) -> Point3D {
        self.target
    }

    /// The `up` hint as given to the constructor.
    pub fn up(&self) -> Vector3D {
        self.up
    }

    /// Projection parameters.
    pub fn kind(&self) -> ProjectionKind {
        self.kind
    }

    /// Unit view direction, `normalize(target - position)`.
    pub fn forward(&self) -> Vector3D {
        self.forward
    }

    /// Unit screen-right axis, `normalize(forward × up)`.
    pub fn right(&self) -> Vector3D {
        self.right
    }

    /// Unit screen-up axis, `right × forward`.
    pub fn true_up(&self) -> Vector3D {
        self.true_up
    }

    /// World-to-view matrix, row-major.
    pub fn view_matrix(&self) -> [f64; 16] {
        self.view.to_row_major()
    }

    /// View-to-clip matrix, row-major.
    pub fn projection_matrix(&self) -> [f64; 16] {
        self.projection.to_row_major()
    }

    /// World-to-clip matrix `projection * view`, row-major.
    pub fn view_projection(&self) -> [f64; 16] {
        self.clip_transform().to_row_major()
    }

    pub(crate) fn clip_transform(&self) -> Transform {
        self.projection.then(&self.view)
    }

    /// Project a world point to normalized device coordinates.
    ///
    /// The perspective divide is skipped when `|w| < EPSILON`, so points in
    /// the eye plane come back as raw clip coordinates.
    pub fn project_to_ndc(&self, point: &Point3D) -> [f64; 3] {
        let [x, y, z, w] = self.clip_transform().apply_homogeneous(point);
        if w.abs() < EPSILON {
            [x, y, z]
        } else {
            [x / w, y / w, z / w]
        }
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::invalid(format!(
            "camera {name} must be positive, got {value}"
        )))
    }
}

fn look_at_basis(position: &Point3D, target: &Point3D, up: &Vector3D) -> Result<Basis> {
    if !position.is_finite() || !target.is_finite() || !up.is_finite() {
        return Err(GeometryError::invalid(
            "camera position, target and up must be finite",
        ));
    }
    let forward = (*target - *position)
        .normalize()
        .map_err(|_| GeometryError::invalid("camera position and target coincide"))?;
    let right = forward.cross(up).normalize().map_err(|_| {
        GeometryError::invalid("camera up vector is zero or parallel to the view direction")
    })?;
    let true_up = right.cross(&forward);
    Ok(Basis {
        forward,
        right,
        true_up,
    })
}

fn view_matrix(position: &Point3D, basis: &Basis) -> Transform {
    let eye = position.to_vector();
    let Basis {
        forward: f,
        right: r,
        true_up: u,
    } = basis;
    #[rustfmt::skip]
    let m = [
        r.x,  r.y,  r.z,  -r.dot(&eye),
        u.x,  u.y,  u.z,  -u.dot(&eye),
        -f.x, -f.y, -f.z, f.dot(&eye),
        0.0,  0.0,  0.0,  1.0,
    ];
    Transform::from_row_major(&m)
}

fn perspective_matrix(fov_degrees: f64, aspect: f64, near: f64, far: f64) -> Transform {
    let f = 1.0 / (fov_degrees.to_radians() / 2.0).tan();
    let depth = near - far;
    #[rustfmt::skip]
    let m = [
        f / aspect, 0.0, 0.0,                  0.0,
        0.0,        f,   0.0,                  0.0,
        0.0,        0.0, (far + near) / depth, 2.0 * far * near / depth,
        0.0,        0.0, -1.0,                 0.0,
    ];
    Transform::from_row_major(&m)
}

fn orthographic_matrix(width: f64, height: f64) -> Transform {
    let depth = ORTHO_FAR - ORTHO_NEAR;
    #[rustfmt::skip]
    let m = [
        2.0 / width, 0.0,          0.0,          0.0,
        0.0,         2.0 / height, 0.0,          0.0,
        0.0,         0.0,          -2.0 / depth, -(ORTHO_FAR + ORTHO_NEAR) / depth,
        0.0,         0.0,          0.0,          1.0,
    ];
    Transform::from_row_major(&m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn perspective() -> Camera {
        Camera::perspective(
            Point3D::new(0.0, 0.0, 10.0),
            Point3D::origin(),
            Vector3D::unit_y(),
            90.0,
            2.0,
            0.1,
            100.0,
        )
        .unwrap()
    }

    fn orthographic() -> Camera {
        Camera::orthographic(
            Point3D::new(0.0, 0.0, 10.0),
            Point3D::origin(),
            Vector3D::unit_y(),
            8.0,
            4.0,
        )
        .unwrap()
    }

    #[test]
    fn test_matrices_are_finite() {
        for camera in [perspective(), orthographic()] {
            let view = camera.view_matrix();
            let proj = camera.projection_matrix();
            assert_eq!(view.len(), 16);
            assert_eq!(proj.len(), 16);
            assert!(view.iter().chain(proj.iter()).all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_basis() {
        let camera = perspective();
        assert_eq!(camera.forward(), Vector3D::new(0.0, 0.0, -1.0));
        assert_eq!(camera.right(), Vector3D::unit_x());
        assert_eq!(camera.true_up(), Vector3D::unit_y());
    }

    #[test]
    fn test_view_matrix_moves_eye_to_origin() {
        let camera = Camera::perspective(
            Point3D::new(3.0, 4.0, 5.0),
            Point3D::new(-1.0, 0.0, 2.0),
            Vector3D::unit_z(),
            45.0,
            1.0,
            0.5,
            50.0,
        )
        .unwrap();
        let view = Transform::from_row_major(&camera.view_matrix());

        let eye = view.apply_point(&camera.position());
        assert!(eye.to_vector().magnitude() < 1e-12);

        // Target lands on the negative z axis
        let target = view.apply_point(&camera.target());
        let dist = camera.position().distance_to(&camera.target());
        assert_relative_eq!(target.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(target.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(target.z, -dist, epsilon = 1e-12);
    }

    #[test]
    fn test_perspective_matrix_entries() {
        let m = perspective().projection_matrix();
        assert_relative_eq!(m[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(m[5], 1.0, epsilon = 1e-12);
        assert_eq!(m[14], -1.0);
        assert_eq!(m[15], 0.0);
    }

    #[test]
    fn test_perspective_depth_range() {
        let camera = perspective();
        let near = camera.position() + camera.forward() * 0.1;
        let far = camera.position() + camera.forward() * 100.0;
        assert_relative_eq!(camera.project_to_ndc(&near)[2], -1.0, epsilon = 1e-9);
        assert_relative_eq!(camera.project_to_ndc(&far)[2], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_target_projects_to_center() {
        for camera in [perspective(), orthographic()] {
            let [x, y, z] = camera.project_to_ndc(&camera.target());
            assert!(x.abs() < 1e-12);
            assert!(y.abs() < 1e-12);
            assert!(z > -1.0 && z < 1.0);
        }
    }

    #[test]
    fn test_orthographic_extent() {
        let camera = orthographic();
        let right_edge = Point3D::new(4.0, 0.0, 0.0);
        let top_edge = Point3D::new(0.0, 2.0, -3.0);
        assert_relative_eq!(camera.project_to_ndc(&right_edge)[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(camera.project_to_ndc(&top_edge)[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_view_projection_composition() {
        let camera = perspective();
        let composed = Transform::from_row_major(&camera.view_projection());
        let p = Point3D::new(1.0, -2.0, 3.0);
        let direct = Transform::from_row_major(&camera.projection_matrix())
            .then(&Transform::from_row_major(&camera.view_matrix()))
            .apply_homogeneous(&p);
        let via = composed.apply_homogeneous(&p);
        for i in 0..4 {
            assert_relative_eq!(direct[i], via[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_invalid_parameters() {
        let eye = Point3D::new(0.0, 0.0, 10.0);
        let target = Point3D::origin();
        let up = Vector3D::unit_y();
        let cases = [
            Camera::perspective(eye, eye, up, 60.0, 1.0, 0.1, 100.0),
            Camera::perspective(eye, target, Vector3D::zero(), 60.0, 1.0, 0.1, 100.0),
            Camera::perspective(eye, target, Vector3D::unit_z(), 60.0, 1.0, 0.1, 100.0),
            Camera::perspective(eye, target, up, 0.0, 1.0, 0.1, 100.0),
            Camera::perspective(eye, target, up, 180.0, 1.0, 0.1, 100.0),
            Camera::perspective(eye, target, up, 60.0, 0.0, 0.1, 100.0),
            Camera::perspective(eye, target, up, 60.0, 1.0, 0.0, 100.0),
            Camera::perspective(eye, target, up, 60.0, 1.0, 0.1, -1.0),
            Camera::perspective(eye, target, up, 60.0, 1.0, 10.0, 10.0),
            Camera::perspective(eye, target, up, 60.0, 1.0, 20.0, 10.0),
            Camera::orthographic(eye, target, up, 0.0, 1.0),
            Camera::orthographic(eye, target, up, 1.0, -1.0),
            Camera::orthographic(eye, target, -Vector3D::unit_z(), 1.0, 1.0),
        ];
        for result in cases {
            assert!(matches!(result, Err(GeometryError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_accessors_keep_inputs() {
        let camera = orthographic();
        assert_eq!(camera.position(), Point3D::new(0.0, 0.0, 10.0));
        assert_eq!(camera.target(), Point3D::origin());
        assert_eq!(camera.up(), Vector3D::unit_y());
        assert_eq!(
            camera.kind(),
            ProjectionKind::Orthographic {
                width: 8.0,
                height: 4.0
            }
        );
    }

    #[test]
    fn test_non_finite_basis_rejected() {
        let eye = Point3D::new(0.0, 0.0, 10.0);
        let cases = [
            (Point3D::new(f64::NAN, 0.0, 10.0), Point3D::origin(), Vector3D::unit_y()),
            (eye, Point3D::new(0.0, f64::INFINITY, 0.0), Vector3D::unit_y()),
            (eye, Point3D::origin(), Vector3D::new(0.0, f64::NAN, 0.0)),
        ];
        for (position, target, up) in cases {
            let err = Camera::perspective(position, target, up, 60.0, 1.0, 0.1, 100.0).unwrap_err();
            assert!(matches!(err, GeometryError::InvalidArgument(_)));
            assert!(Camera::orthographic(position, target, up, 4.0, 4.0).is_err());
        }
    }
}
