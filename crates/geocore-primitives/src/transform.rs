//! Rigid translation and uniform scaling of shapes.

use geocore_math::{GeometryError, Point3D, Result, Transform, Vector3D};

use crate::{Aabb, LineSegment, Sphere, Triangle};

/// Shapes that can be moved and uniformly scaled.
///
/// Both operations return a new value and leave `self` untouched.
pub trait Transformable: Sized {
    /// Move by `offset`.
    fn translate(&self, offset: &Vector3D) -> Self;

    /// Scale about `center` by `factor`.
    ///
    /// Fails with `InvalidArgument` when `factor` is not finite, or when the
    /// result would not be a valid shape.
    fn scale(&self, center: &Point3D, factor: f64) -> Result<Self>;
}

fn scaling(center: &Point3D, factor: f64) -> Result<Transform> {
    if !factor.is_finite() {
        return Err(GeometryError::invalid(format!(
            "scale factor must be finite, got {factor}"
        )));
    }
    Ok(Transform::scaling_about(center, factor))
}

impl Transformable for Point3D {
    fn translate(&self, offset: &Vector3D) -> Self {
        Transform::translation(offset).apply_point(self)
    }

    fn scale(&self, center: &Point3D, factor: f64) -> Result<Self> {
        Ok(scaling(center, factor)?.apply_point(self))
    }
}

/// Vectors are free: translation is the identity and scaling ignores `center`.
impl Transformable for Vector3D {
    fn translate(&self, offset: &Vector3D) -> Self {
        Transform::translation(offset).apply_vec(self)
    }

    fn scale(&self, center: &Point3D, factor: f64) -> Result<Self> {
        Ok(scaling(center, factor)?.apply_vec(self))
    }
}

impl Transformable for LineSegment {
    fn translate(&self, offset: &Vector3D) -> Self {
        let t = Transform::translation(offset);
        LineSegment::new(t.apply_point(&self.start), t.apply_point(&self.end))
    }

    fn scale(&self, center: &Point3D, factor: f64) -> Result<Self> {
        let t = scaling(center, factor)?;
        Ok(LineSegment::new(
            t.apply_point(&self.start),
            t.apply_point(&self.end),
        ))
    }
}

impl Transformable for Triangle {
    fn translate(&self, offset: &Vector3D) -> Self {
        let t = Transform::translation(offset);
        Triangle::new(
            t.apply_point(&self.a),
            t.apply_point(&self.b),
            t.apply_point(&self.c),
        )
    }

    fn scale(&self, center: &Point3D, factor: f64) -> Result<Self> {
        let t = scaling(center, factor)?;
        Ok(Triangle::new(
            t.apply_point(&self.a),
            t.apply_point(&self.b),
            t.apply_point(&self.c),
        ))
    }
}

impl Transformable for Sphere {
    fn translate(&self, offset: &Vector3D) -> Self {
        Sphere {
            center: Transform::translation(offset).apply_point(&self.center),
            radius: self.radius,
        }
    }

    fn scale(&self, center: &Point3D, factor: f64) -> Result<Self> {
        let t = scaling(center, factor)?;
        Sphere::new(t.apply_point(&self.center), self.radius * factor.abs())
    }
}

impl Transformable for Aabb {
    fn translate(&self, offset: &Vector3D) -> Self {
        let t = Transform::translation(offset);
        Aabb {
            min: t.apply_point(&self.min),
            max: t.apply_point(&self.max),
        }
    }

    fn scale(&self, center: &Point3D, factor: f64) -> Result<Self> {
        let t = scaling(center, factor)?;
        let a = t.apply_point(&self.min);
        let b = t.apply_point(&self.max);
        Ok(Aabb::from_point(a).expand_by_point(&b))
    }
}
