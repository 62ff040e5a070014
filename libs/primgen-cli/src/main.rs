//! primgen - parametric mesh primitive generator
//!
//! Generates test/reference geometry (UV sphere, torus, plane grid,
//! saddle surface) as text mesh files for downstream mesh-algorithm
//! testbeds.

use anyhow::{Context, Result};
use clap::Parser;
use config::constants::{
    DEFAULT_PLANE_DIVISIONS, DEFAULT_PLANE_SIZE, DEFAULT_SADDLE_DIVISIONS, DEFAULT_SADDLE_HEIGHT,
    DEFAULT_SADDLE_SIZE, DEFAULT_SPHERE_RADIUS, DEFAULT_SPHERE_SLICES, DEFAULT_SPHERE_STACKS,
    DEFAULT_TORUS_MAJOR_RADIUS, DEFAULT_TORUS_MINOR_RADIUS, DEFAULT_TORUS_SEGMENTS_MAJOR,
    DEFAULT_TORUS_SEGMENTS_MINOR, SPHERE_LOW_SLICES, SPHERE_LOW_STACKS,
};
use primgen_mesh::primitives::{plane_grid, saddle_grid, sphere_uv, torus};
use primgen_mesh::Mesh;
use primgen_obj::{write_obj, WriteOptions};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "primgen")]
#[command(about = "Generate parametric mesh primitives as text mesh files")]
#[command(version)]
struct Cli {
    /// Output directory for the generated files (created if missing)
    #[arg(long)]
    out: PathBuf,

    /// Sphere longitude divisions
    #[arg(long, default_value_t = DEFAULT_SPHERE_SLICES)]
    sphere_slices: u32,

    /// Sphere latitude divisions
    #[arg(long, default_value_t = DEFAULT_SPHERE_STACKS)]
    sphere_stacks: u32,

    /// Sphere radius
    #[arg(long, default_value_t = DEFAULT_SPHERE_RADIUS)]
    sphere_radius: f64,

    /// Torus major (ring) radius
    #[arg(long, default_value_t = DEFAULT_TORUS_MAJOR_RADIUS)]
    torus_major: f64,

    /// Torus minor (tube) radius
    #[arg(long, default_value_t = DEFAULT_TORUS_MINOR_RADIUS)]
    torus_minor: f64,

    /// Torus segments around the ring
    #[arg(long, default_value_t = DEFAULT_TORUS_SEGMENTS_MAJOR)]
    torus_seg_major: u32,

    /// Torus segments around the tube
    #[arg(long, default_value_t = DEFAULT_TORUS_SEGMENTS_MINOR)]
    torus_seg_minor: u32,

    /// Saddle grid half-extent
    #[arg(long, default_value_t = DEFAULT_SADDLE_SIZE)]
    saddle_size: f64,

    /// Saddle grid divisions per axis
    #[arg(long, default_value_t = DEFAULT_SADDLE_DIVISIONS)]
    saddle_divisions: u32,

    /// Saddle height scale (z = h * (x^2 - y^2))
    #[arg(long, default_value_t = DEFAULT_SADDLE_HEIGHT)]
    saddle_height: f64,

    /// Plane grid half-extent
    #[arg(long, default_value_t = DEFAULT_PLANE_SIZE)]
    plane_size: f64,

    /// Plane grid divisions per axis
    #[arg(long, default_value_t = DEFAULT_PLANE_DIVISIONS)]
    plane_divisions: u32,

    /// Skip the (optional) plane primitive
    #[arg(long)]
    skip_plane: bool,
}

/// Writes one generated mesh with its parameter header and logs the result.
fn emit(out_dir: &Path, filename: &str, mesh: &Mesh, header: Vec<String>) -> Result<()> {
    let path = out_dir.join(filename);
    write_obj(&path, mesh, &header, &WriteOptions::default())
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(
        "Wrote {} ({} vertices, {} faces)",
        path.display(),
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.out)
        .with_context(|| format!("failed to create output directory {}", cli.out.display()))?;

    let sphere = sphere_uv(cli.sphere_radius, cli.sphere_slices, cli.sphere_stacks)?;
    emit(
        &cli.out,
        "sphere.obj",
        &sphere,
        vec![
            "Generated sphere (UV)".to_string(),
            format!("slices={}", cli.sphere_slices),
            format!("stacks={}", cli.sphere_stacks),
            format!("radius={}", cli.sphere_radius),
        ],
    )?;

    // A deliberately low-res sphere to highlight differences between
    // shortest paths on mesh edges and analytic great-circle distances.
    let sphere_low = sphere_uv(cli.sphere_radius, SPHERE_LOW_SLICES, SPHERE_LOW_STACKS)?;
    emit(
        &cli.out,
        "sphere_low.obj",
        &sphere_low,
        vec![
            "Generated sphere (UV) - low resolution".to_string(),
            format!("slices={SPHERE_LOW_SLICES}"),
            format!("stacks={SPHERE_LOW_STACKS}"),
            format!("radius={}", cli.sphere_radius),
        ],
    )?;

    if !cli.skip_plane {
        let plane = plane_grid(cli.plane_size, cli.plane_divisions)?;
        emit(
            &cli.out,
            "plane.obj",
            &plane,
            vec![
                "Generated plane grid (Z=0)".to_string(),
                format!("size={}", cli.plane_size),
                format!("divisions={}", cli.plane_divisions),
            ],
        )?;
    }

    let donut = torus(
        cli.torus_major,
        cli.torus_minor,
        cli.torus_seg_major,
        cli.torus_seg_minor,
    )?;
    emit(
        &cli.out,
        "donut.obj",
        &donut,
        vec![
            "Generated torus".to_string(),
            format!("major_radius={}", cli.torus_major),
            format!("minor_radius={}", cli.torus_minor),
            format!("segments_major={}", cli.torus_seg_major),
            format!("segments_minor={}", cli.torus_seg_minor),
        ],
    )?;

    let saddle = saddle_grid(cli.saddle_size, cli.saddle_divisions, cli.saddle_height)?;
    emit(
        &cli.out,
        "saddle.obj",
        &saddle,
        vec![
            "Generated saddle z = h*(x^2 - y^2)".to_string(),
            format!("size={}", cli.saddle_size),
            format!("divisions={}", cli.saddle_divisions),
            format!("height={}", cli.saddle_height),
        ],
    )?;

    Ok(())
}
