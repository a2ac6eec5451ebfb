//! SVG scene renderer.
//!
//! Primitives are projected when they are added and kept as 2D draw
//! commands; serialization only formats what is already there and can be
//! repeated any number of times.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use geocore_math::Point3D;
use geocore_primitives::{Aabb, LineSegment, Sphere, Triangle};
use serde::{Deserialize, Serialize};

use crate::projection::{project_point, Point2D};
use crate::Camera;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Stroke and fill of a draw command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Stroke color, any SVG color string.
    pub stroke: String,
    /// Fill color, `None` for unfilled shapes.
    pub fill: Option<String>,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

/// A projected primitive, ready to serialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Filled dot; `<circle>`.
    Point {
        /// Screen position.
        center: Point2D,
        /// Dot radius in pixels.
        radius: f64,
        /// Style.
        style: Style,
    },
    /// Line segment; `<line>`.
    Segment {
        /// Screen start.
        start: Point2D,
        /// Screen end.
        end: Point2D,
        /// Style.
        style: Style,
    },
    /// Triangle outline or fill; `<polygon>`.
    Triangle {
        /// Screen vertices in `a, b, c` order.
        points: [Point2D; 3],
        /// Style.
        style: Style,
    },
    /// Sphere silhouette; `<circle>`.
    Sphere {
        /// Screen center.
        center: Point2D,
        /// Projected radius in pixels.
        radius: f64,
        /// Style.
        style: Style,
    },
    /// Box wireframe; twelve `<line>`s.
    Aabb {
        /// Screen edges in [`Aabb::EDGES`] order.
        edges: [(Point2D, Point2D); 12],
        /// Style.
        style: Style,
    },
}

/// Builds an SVG document from 3D primitives seen through a [`Camera`].
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    width: u32,
    height: u32,
    camera: Camera,
    background: Option<String>,
    commands: Vec<DrawCommand>,
}

impl SvgRenderer {
    /// Create an empty renderer for a `width × height` pixel canvas.
    pub fn new(width: u32, height: u32, camera: Camera) -> Self {
        Self {
            width,
            height,
            camera,
            background: None,
            commands: Vec::new(),
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The camera used for projection.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Background color, if set.
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Fill the canvas with `color`. The last call wins.
    pub fn set_background(&mut self, color: &str) {
        self.background = Some(color.to_string());
    }

    /// Accumulated commands in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of accumulated commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all commands. The background is kept.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn project(&self, point: &Point3D) -> Point2D {
        project_point(point, &self.camera, self.width, self.height)
    }

    fn push(&mut self, command: DrawCommand) {
        tracing::trace!(index = self.commands.len(), ?command, "draw command added");
        self.commands.push(command);
    }

    /// Add a filled dot of `radius` pixels.
    pub fn add_point(&mut self, point: &Point3D, color: &str, radius: f64) {
        let center = self.project(point);
        self.push(DrawCommand::Point {
            center,
            radius,
            style: Style {
                stroke: color.to_string(),
                fill: Some(color.to_string()),
                stroke_width: 1.0,
            },
        });
    }

    /// Add a line segment.
    pub fn add_line_segment(&mut self, segment: &LineSegment, color: &str, width: f64) {
        let start = self.project(&segment.start);
        let end = self.project(&segment.end);
        self.push(DrawCommand::Segment {
            start,
            end,
            style: stroke_only(color, width),
        });
    }

    /// Add a triangle, filled with `fill` when given.
    pub fn add_triangle(
        &mut self,
        triangle: &Triangle,
        stroke: &str,
        fill: Option<&str>,
        width: f64,
    ) {
        let points = triangle.vertices().map(|v| self.project(&v));
        self.push(DrawCommand::Triangle {
            points,
            style: Style {
                stroke: stroke.to_string(),
                fill: fill.map(str::to_string),
                stroke_width: width,
            },
        });
    }

    /// Add a sphere outline.
    ///
    /// The screen radius is the distance between the projected center and
    /// the projection of `center + right * radius`, where `right` is the
    /// camera's screen-right axis.
    pub fn add_sphere(&mut self, sphere: &Sphere, color: &str, width: f64) {
        let center = self.project(&sphere.center);
        let rim = self.project(&(sphere.center + self.camera.right() * sphere.radius));
        self.push(DrawCommand::Sphere {
            center,
            radius: center.distance(&rim),
            style: stroke_only(color, width),
        });
    }

    /// Add the twelve edges of a box as one command.
    pub fn add_aabb(&mut self, aabb: &Aabb, color: &str, width: f64) {
        let edges = aabb
            .edge_points()
            .map(|(a, b)| (self.project(&a), self.project(&b)));
        self.push(DrawCommand::Aabb {
            edges,
            style: stroke_only(color, width),
        });
    }

    /// Serialize the scene. Does not consume or clear the commands.
    pub fn to_svg_string(&self) -> String {
        tracing::debug!(commands = self.commands.len(), "serializing svg");
        self.to_string()
    }

    /// Write the document to `writer`.
    pub fn write_svg<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{self}")
    }

    /// Write the document to a file at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), commands = self.commands.len(), "saving svg");
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_svg(&mut writer)?;
        writer.flush()
    }
}

fn stroke_only(color: &str, width: f64) -> Style {
    Style {
        stroke: color.to_string(),
        fill: None,
        stroke_width: width,
    }
}

impl fmt::Display for SvgRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (self.width, self.height);
        writeln!(
            f,
            "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"{SVG_NAMESPACE}\">"
        )?;

        if let Some(bg) = &self.background {
            writeln!(
                f,
                "  <rect width=\"100%\" height=\"100%\" fill=\"{}\" />",
                Escaped(bg)
            )?;
        }

        for command in &self.commands {
            write_command(f, command)?;
        }

        write!(f, "</svg>")
    }
}

fn write_command(f: &mut fmt::Formatter<'_>, command: &DrawCommand) -> fmt::Result {
    match command {
        DrawCommand::Point {
            center,
            radius,
            style,
        }
        | DrawCommand::Sphere {
            center,
            radius,
            style,
        } => writeln!(
            f,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" {} />",
            center.x,
            center.y,
            radius,
            StyleAttrs(style)
        ),
        DrawCommand::Segment { start, end, style } => write_line(f, start, end, style),
        DrawCommand::Triangle { points, style } => {
            let [a, b, c] = points;
            writeln!(
                f,
                "  <polygon points=\"{},{} {},{} {},{}\" {} />",
                a.x,
                a.y,
                b.x,
                b.y,
                c.x,
                c.y,
                StyleAttrs(style)
            )
        }
        DrawCommand::Aabb { edges, style } => {
            for (start, end) in edges {
                write_line(f, start, end, style)?;
            }
            Ok(())
        }
    }
}

fn write_line(
    f: &mut fmt::Formatter<'_>,
    start: &Point2D,
    end: &Point2D,
    style: &Style,
) -> fmt::Result {
    writeln!(
        f,
        "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\" />",
        start.x,
        start.y,
        end.x,
        end.y,
        Escaped(&style.stroke),
        style.stroke_width
    )
}

/// `stroke`, `fill` and `stroke-width` attributes; `fill="none"` when unset.
struct StyleAttrs<'a>(&'a Style);

impl fmt::Display for StyleAttrs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.0;
        write!(f, "stroke=\"{}\" ", Escaped(&style.stroke))?;
        match &style.fill {
            Some(fill) => write!(f, "fill=\"{}\" ", Escaped(fill))?,
            None => write!(f, "fill=\"none\" ")?,
        }
        write!(f, "stroke-width=\"{}\"", style.stroke_width)
    }
}

/// XML attribute escaping.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                _ => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}
