//! TOML scene files.
//!
//! A scene lists a canvas, an optional camera and any number of primitives.
//! Coordinates are `[x, y, z]` arrays. Primitives are validated when the
//! scene is turned into kernel types, so the error can name the entry.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use geocore::{
    Aabb, AabbHit, Camera, LineSegment, Plane, PlaneHit, Point3D, Ray, Sphere, SphereHit,
    SvgRenderer, Triangle, TriangleHit, Vector3D,
};
use serde::{Deserialize, Serialize};

fn default_color() -> String {
    "black".to_string()
}

fn default_width() -> f64 {
    1.0
}

fn default_point_radius() -> f64 {
    3.0
}

fn default_up() -> [f64; 3] {
    [0.0, 1.0, 0.0]
}

fn default_fov() -> f64 {
    60.0
}

fn default_near() -> f64 {
    0.1
}

fn default_far() -> f64 {
    100.0
}

/// Output canvas.
#[derive(Debug, Clone, Deserialize)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub background: Option<String>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: None,
        }
    }
}

/// Camera section. `aspect` defaults to the canvas ratio.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CameraConfig {
    Perspective {
        position: [f64; 3],
        target: [f64; 3],
        #[serde(default = "default_up")]
        up: [f64; 3],
        #[serde(default = "default_fov")]
        fov: f64,
        #[serde(default)]
        aspect: Option<f64>,
        #[serde(default = "default_near")]
        near: f64,
        #[serde(default = "default_far")]
        far: f64,
    },
    Orthographic {
        position: [f64; 3],
        target: [f64; 3],
        #[serde(default = "default_up")]
        up: [f64; 3],
        width: f64,
        height: f64,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointEntry {
    pub at: [f64; 3],
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_point_radius")]
    pub radius: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SegmentEntry {
    pub start: [f64; 3],
    pub end: [f64; 3],
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_width")]
    pub width: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TriangleEntry {
    pub a: [f64; 3],
    pub b: [f64; 3],
    pub c: [f64; 3],
    #[serde(default = "default_color")]
    pub stroke: String,
    #[serde(default)]
    pub fill: Option<String>,
    #[serde(default = "default_width")]
    pub width: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SphereEntry {
    pub center: [f64; 3],
    pub radius: f64,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_width")]
    pub width: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoxEntry {
    pub min: [f64; 3],
    pub max: [f64; 3],
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_width")]
    pub width: f64,
}

/// Planes take part in ray casting only; they are unbounded and not drawn.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaneEntry {
    pub point: [f64; 3],
    pub normal: [f64; 3],
}

#[derive(Debug, Clone, Deserialize)]
pub struct RayEntry {
    pub origin: [f64; 3],
    pub direction: [f64; 3],
}

/// A parsed scene file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub canvas: CanvasConfig,
    pub camera: Option<CameraConfig>,
    pub points: Vec<PointEntry>,
    pub segments: Vec<SegmentEntry>,
    pub triangles: Vec<TriangleEntry>,
    pub spheres: Vec<SphereEntry>,
    pub boxes: Vec<BoxEntry>,
    pub planes: Vec<PlaneEntry>,
    pub rays: Vec<RayEntry>,
}

/// One ray-primitive intersection in `cast` output.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Hit {
    Sphere { index: usize, hit: SphereHit },
    Plane { index: usize, hit: PlaneHit },
    Triangle { index: usize, hit: TriangleHit },
    Box { index: usize, hit: AabbHit },
}

impl Hit {
    /// Smallest non-negative parameter of this hit.
    fn forward_t(&self) -> Option<f64> {
        match self {
            Hit::Sphere { hit, .. } => hit.nearest_non_negative(),
            Hit::Plane { hit, .. } => Some(hit.t).filter(|t| *t >= 0.0),
            Hit::Triangle { hit, .. } => Some(hit.t).filter(|t| *t >= 0.0),
            Hit::Box { hit, .. } => [hit.t_min, hit.t_max].into_iter().find(|t| *t >= 0.0),
        }
    }
}

/// All intersections of one `[[rays]]` entry.
#[derive(Debug, Clone, Serialize)]
pub struct RayReport {
    pub ray: usize,
    pub origin: Point3D,
    pub direction: Vector3D,
    pub hits: Vec<Hit>,
    /// Nearest hit parameter in front of the origin, if any.
    pub nearest: Option<f64>,
}

fn point(a: [f64; 3]) -> Point3D {
    Point3D::from_array(a)
}

fn vector(a: [f64; 3]) -> Vector3D {
    Vector3D::from_array(a)
}

impl Scene {
    /// Read and parse a scene file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scene {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid scene {}", path.display()))
    }

    /// Parse a scene from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let scene: Scene = toml::from_str(text)?;
        tracing::debug!(
            points = scene.points.len(),
            segments = scene.segments.len(),
            triangles = scene.triangles.len(),
            spheres = scene.spheres.len(),
            boxes = scene.boxes.len(),
            planes = scene.planes.len(),
            rays = scene.rays.len(),
            "scene parsed"
        );
        Ok(scene)
    }

    /// Build the camera described by the `[camera]` section.
    pub fn camera(&self) -> Result<Camera> {
        let Some(config) = &self.camera else {
            bail!("scene has no [camera] section");
        };
        let camera = match *config {
            CameraConfig::Perspective {
                position,
                target,
                up,
                fov,
                aspect,
                near,
                far,
            } => {
                let aspect = aspect
                    .unwrap_or_else(|| f64::from(self.canvas.width) / f64::from(self.canvas.height));
                Camera::perspective(point(position), point(target), vector(up), fov, aspect, near, far)
            }
            CameraConfig::Orthographic {
                position,
                target,
                up,
                width,
                height,
            } => Camera::orthographic(point(position), point(target), vector(up), width, height),
        };
        camera.context("invalid camera")
    }

    /// Validated spheres; the error names the offending `[[spheres]]` entry.
    pub fn spheres(&self) -> Result<Vec<Sphere>> {
        self.spheres
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Sphere::new(point(s.center), s.radius).with_context(|| format!("spheres[{i}]"))
            })
            .collect()
    }

    /// Validated boxes, in file order.
    pub fn boxes(&self) -> Result<Vec<Aabb>> {
        self.boxes
            .iter()
            .enumerate()
            .map(|(i, b)| Aabb::new(point(b.min), point(b.max)).with_context(|| format!("boxes[{i}]")))
            .collect()
    }

    /// Planes built from a point and a normal. A zero normal is an error.
    pub fn planes(&self) -> Result<Vec<Plane>> {
        self.planes
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Plane::from_point_normal(&point(p.point), &vector(p.normal))
                    .with_context(|| format!("planes[{i}]"))
            })
            .collect()
    }

    /// Rays to cast. A zero or non-finite direction is an error.
    pub fn rays(&self) -> Result<Vec<Ray>> {
        self.rays
            .iter()
            .enumerate()
            .map(|(i, r)| {
                Ray::new(point(r.origin), vector(r.direction)).with_context(|| format!("rays[{i}]"))
            })
            .collect()
    }

    /// Segments as given. Degenerate ones are kept.
    pub fn segments(&self) -> Vec<LineSegment> {
        self.segments
            .iter()
            .map(|s| LineSegment::new(point(s.start), point(s.end)))
            .collect()
    }

    /// Triangles as given. Degenerate ones are kept.
    pub fn triangles(&self) -> Vec<Triangle> {
        self.triangles
            .iter()
            .map(|t| Triangle::new(point(t.a), point(t.b), point(t.c)))
            .collect()
    }

    /// Every point that defines a drawable primitive.
    pub fn defining_points(&self) -> Vec<Point3D> {
        let mut points: Vec<Point3D> = self.points.iter().map(|p| point(p.at)).collect();
        for s in &self.segments {
            points.extend([point(s.start), point(s.end)]);
        }
        for t in &self.triangles {
            points.extend([point(t.a), point(t.b), point(t.c)]);
        }
        for s in &self.spheres {
            let r = s.radius.abs();
            let offset = Vector3D::new(r, r, r);
            points.extend([point(s.center) - offset, point(s.center) + offset]);
        }
        for b in &self.boxes {
            points.extend([point(b.min), point(b.max)]);
        }
        points
    }

    /// Project every drawable primitive into a renderer.
    pub fn render(&self) -> Result<SvgRenderer> {
        let mut renderer = SvgRenderer::new(self.canvas.width, self.canvas.height, self.camera()?);
        if let Some(bg) = &self.canvas.background {
            renderer.set_background(bg);
        }

        for (entry, triangle) in self.triangles.iter().zip(self.triangles()) {
            renderer.add_triangle(&triangle, &entry.stroke, entry.fill.as_deref(), entry.width);
        }
        for (entry, bbox) in self.boxes.iter().zip(self.boxes()?) {
            renderer.add_aabb(&bbox, &entry.color, entry.width);
        }
        for (entry, sphere) in self.spheres.iter().zip(self.spheres()?) {
            renderer.add_sphere(&sphere, &entry.color, entry.width);
        }
        for (entry, segment) in self.segments.iter().zip(self.segments()) {
            renderer.add_line_segment(&segment, &entry.color, entry.width);
        }
        for entry in &self.points {
            renderer.add_point(&point(entry.at), &entry.color, entry.radius);
        }

        tracing::info!(commands = renderer.len(), "scene rendered");
        Ok(renderer)
    }

    /// Cast every ray against spheres, planes, triangles and boxes.
    pub fn cast(&self) -> Result<Vec<RayReport>> {
        let spheres = self.spheres()?;
        let planes = self.planes()?;
        let triangles = self.triangles();
        let boxes = self.boxes()?;

        let reports = self
            .rays()?
            .into_iter()
            .enumerate()
            .map(|(ray_index, ray)| {
                let mut hits = Vec::new();
                for (index, sphere) in spheres.iter().enumerate() {
                    if let Some(hit) = ray.intersect_sphere(sphere) {
                        hits.push(Hit::Sphere { index, hit });
                    }
                }
                for (index, plane) in planes.iter().enumerate() {
                    if let Some(hit) = ray.intersect_plane(plane) {
                        hits.push(Hit::Plane { index, hit });
                    }
                }
                for (index, triangle) in triangles.iter().enumerate() {
                    if let Some(hit) = ray.intersect_triangle(triangle) {
                        hits.push(Hit::Triangle { index, hit });
                    }
                }
                for (index, bbox) in boxes.iter().enumerate() {
                    if let Some(hit) = ray.intersect_aabb(bbox) {
                        hits.push(Hit::Box { index, hit });
                    }
                }
                let nearest = hits.iter().filter_map(Hit::forward_t).reduce(f64::min);
                tracing::debug!(ray = ray_index, hits = hits.len(), ?nearest, "ray cast");
                RayReport {
                    ray: ray_index,
                    origin: ray.origin,
                    direction: ray.direction,
                    hits,
                    nearest,
                }
            })
            .collect();
        Ok(reports)
    }
}
