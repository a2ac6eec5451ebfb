//! geocore CLI - render and ray-cast TOML scene files
//!
//! Reads a scene description, then writes SVG, prints ray hits as JSON, or
//! summarizes the scene.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geocore::Aabb;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

mod logging;
mod scene;

use scene::Scene;

#[derive(Parser)]
#[command(name = "geocore")]
#[command(about = "Render and ray-cast 3D geometry scenes", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene to SVG
    Render {
        /// Scene file (.toml)
        scene: PathBuf,
        /// Output file; SVG goes to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Cast the scene's rays and print hits as JSON
    Cast {
        /// Scene file (.toml)
        scene: PathBuf,
        /// Emit a single line instead of pretty-printed JSON
        #[arg(long)]
        compact: bool,
    },
    /// Display information about a scene file
    Info {
        /// Scene file (.toml)
        scene: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Render { scene, output } => {
            render(&scene, output.as_deref())?;
        }
        Commands::Cast { scene, compact } => {
            cast(&scene, compact)?;
        }
        Commands::Info { scene } => {
            show_info(&scene)?;
        }
    }

    Ok(())
}

fn render(path: &Path, output: Option<&Path>) -> Result<()> {
    let scene = Scene::load(path)?;
    let renderer = scene.render()?;

    match output {
        Some(out) => {
            renderer
                .save(out)
                .with_context(|| format!("failed to write {}", out.display()))?;
            eprintln!("Rendered {} elements to {}", renderer.len(), out.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            renderer.write_svg(&mut lock)?;
            lock.flush()?;
        }
    }

    Ok(())
}

fn cast(path: &Path, compact: bool) -> Result<()> {
    let scene = Scene::load(path)?;
    let reports = scene.cast()?;

    let json = if compact {
        serde_json::to_string(&reports)?
    } else {
        serde_json::to_string_pretty(&reports)?
    };
    println!("{json}");

    Ok(())
}

fn show_info(path: &Path) -> Result<()> {
    let scene = Scene::load(path)?;

    println!("geocore scene: {}", path.display());
    println!("  Canvas: {} x {}", scene.canvas.width, scene.canvas.height);
    match scene.camera() {
        Ok(camera) => println!("  Camera: {:?}", camera.kind()),
        Err(e) => println!("  Camera: {e:#}"),
    }
    println!("  Points: {}", scene.points.len());
    println!("  Segments: {}", scene.segments.len());
    println!("  Triangles: {}", scene.triangles.len());
    println!("  Spheres: {}", scene.spheres.len());
    println!("  Boxes: {}", scene.boxes.len());
    println!("  Planes: {}", scene.planes.len());
    println!("  Rays: {}", scene.rays.len());

    let segments = scene.segments();
    if !segments.is_empty() {
        let total: f64 = segments.iter().map(|s| s.length()).sum();
        println!("\nSegments: total length {total}");
    }

    let triangles = scene.triangles();
    if !triangles.is_empty() {
        println!("\nTriangles:");
        for (i, t) in triangles.iter().enumerate() {
            let state = if t.is_degenerate() { " (degenerate)" } else { "" };
            println!("  {i}: area {}{state}", t.area());
        }
    }

    let spheres = scene.spheres()?;
    if !spheres.is_empty() {
        println!("\nSpheres:");
        for (i, s) in spheres.iter().enumerate() {
            println!("  {i}: volume {} surface {}", s.volume(), s.surface_area());
        }
    }

    let boxes = scene.boxes()?;
    if !boxes.is_empty() {
        println!("\nBoxes:");
        for (i, b) in boxes.iter().enumerate() {
            println!("  {i}: volume {} diagonal {}", b.volume(), b.diagonal());
        }
    }

    let points = scene.defining_points();
    if let Ok(bounds) = Aabb::from_points(&points) {
        println!("\nBounds:");
        println!("  min {:?} max {:?}", bounds.min.to_array(), bounds.max.to_array());
        println!("  center {:?}", bounds.center().to_array());
        println!("  size {:?}", bounds.size().to_array());
    }

    Ok(())
}
