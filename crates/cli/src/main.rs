//! Command line for the `immersion` crate: shape files in, area functions out.
//!
//! Logging goes to stderr; filter with `RUST_LOG` (default `info`), e.g.
//! `RUST_LOG=immersion=debug` for per-band estimates.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use immersion::buoyancy::{equilibrium_depth, WATER_DENSITY};
use immersion::geom2::circle_fan;
use immersion::{compute_area_function, SliceCfg};
use polars::prelude::*;
use serde_json::json;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod area_json;
mod provenance;
mod shape_csv;

use provenance::Provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Monte Carlo cumulative area functions for triangulated cross-sections")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Estimate A(h) for a shape CSV and write it as JSON
    Area {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Band height
        #[arg(long, default_value_t = 0.5)]
        slice_height: f64,
        /// Uniform samples per band
        #[arg(long, default_value_t = 10_000)]
        samples: usize,
        /// RNG seed; drawn from entropy (and logged) when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Also write a two-column (height, area) CSV for plotting
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// Write a fan-triangulated circle as a shape CSV
    Circle {
        #[arg(long, default_value_t = 0.2)]
        radius: f64,
        #[arg(long, default_value_t = 12)]
        segments: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Equilibrium immersion depth of an extruded cross-section
    Depth {
        /// Area function JSON written by `area`
        #[arg(long)]
        from: PathBuf,
        /// Body mass (kg)
        #[arg(long)]
        mass: f64,
        /// Extrusion length of the cross-section (m)
        #[arg(long, default_value_t = 0.2)]
        thickness: f64,
        /// Fluid density (kg/m³)
        #[arg(long, default_value_t = WATER_DENSITY)]
        density: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Area {
            input,
            out,
            slice_height,
            samples,
            seed,
            table,
        } => area(&input, &out, slice_height, samples, seed, table.as_deref()),
        Action::Circle {
            radius,
            segments,
            out,
        } => circle(radius, segments, &out),
        Action::Depth {
            from,
            mass,
            thickness,
            density,
        } => depth(&from, mass, thickness, density),
        Action::Report => report(),
    }
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn area(
    input: &Path,
    out: &Path,
    slice_height: f64,
    samples: usize,
    seed: Option<u64>,
    table: Option<&Path>,
) -> Result<()> {
    let cfg = SliceCfg::new(slice_height, samples)?;
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!(input = %input.display(), out = %out.display(), seed, "area");

    let shape = shape_csv::read_shape(input)?;
    let bounds = shape.bounding_box();
    tracing::info!(
        triangles = shape.triangles().len(),
        min_x = bounds.min_x,
        min_y = bounds.min_y,
        max_x = bounds.max_x,
        max_y = bounds.max_y,
        "shape"
    );
    let af = compute_area_function(&shape, &cfg, seed)?;

    let params = json!({
        "slice_height": cfg.slice_height,
        "samples_per_slice": cfg.samples_per_slice,
        "seed": af.seed(),
        "anchor_y": af.anchor_y(),
    });
    let prov = Provenance::new("area", params).input(input);
    area_json::write_area_function(&af, out)?;
    prov.write_next_to(out)?;

    if let Some(table) = table {
        let mut df = df!(
            "height" => af.heights().collect::<Vec<f64>>(),
            "area" => af.areas().to_vec()
        )?;
        ensure_parent(table)?;
        let mut file = File::create(table)?;
        CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
        prov.write_next_to(table)?;
        tracing::info!(table = %table.display(), rows = df.height(), "table");
    }
    Ok(())
}

fn circle(radius: f64, segments: usize, out: &Path) -> Result<()> {
    tracing::info!(radius, segments, out = %out.display(), "circle");
    let shape = circle_fan(radius, segments)?;
    shape_csv::write_shape(&shape, out)?;
    Provenance::new("circle", json!({ "radius": radius, "segments": segments }))
        .write_next_to(out)?;
    Ok(())
}

fn depth(from: &Path, mass: f64, thickness: f64, density: f64) -> Result<()> {
    let obj = equilibrium(from, mass, thickness, density)?;
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn equilibrium(from: &Path, mass: f64, thickness: f64, density: f64) -> Result<serde_json::Value> {
    let af = area_json::read_area_function(from)?;
    let Some(d) = equilibrium_depth(&af, mass, thickness, density) else {
        bail!(
            "no equilibrium: {mass} kg needs more than the full cross-section ({} m²) at thickness {thickness} m",
            af.total_area()
        );
    };
    Ok(json!({
        "depth": d,
        "area": af.area_at(d),
        "mass": mass,
        "thickness": thickness,
        "density": density,
    }))
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::code_rev(),
        "version": immersion::VERSION,
        "defaults": {
            "slice_height": SliceCfg::default().slice_height,
            "samples_per_slice": SliceCfg::default().samples_per_slice,
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SQUARE: &str = "x1,y1,x2,y2,x3,y3\n0,0,1,0,1,1\n0,0,1,1,0,1\n";

    #[test]
    fn area_then_depth_round_trip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("square.csv");
        let out = dir.path().join("run/square_out.json");
        let table = dir.path().join("run/square_table.csv");
        fs::write(&input, SQUARE).unwrap();

        area(&input, &out, 0.5, 4_000, Some(3), Some(&table)).unwrap();

        let af = area_json::read_area_function(&out).unwrap();
        assert_eq!(af.len(), 3);
        assert!((af.total_area() - 1.0).abs() < 0.03);
        let text = fs::read_to_string(&table).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("height,area"));
        assert_eq!(lines.count(), 3);
        let prov: serde_json::Value =
            serde_json::from_slice(&fs::read(dir.path().join("run/square_out.provenance.json")).unwrap())
                .unwrap();
        assert_eq!(prov["params"]["seed"], 3);
        assert!(dir.path().join("run/square_table.provenance.json").exists());

        // Half the unit square displaces 0.5 m² · 0.2 m of water.
        let mass = 0.5 * 0.2 * WATER_DENSITY;
        let eq = equilibrium(&out, mass, 0.2, WATER_DENSITY).unwrap();
        let d = eq["depth"].as_f64().unwrap();
        assert!((d - 0.5).abs() < 0.06, "depth = {d}");
        assert!(equilibrium(&out, 10.0 * mass, 0.2, WATER_DENSITY).is_err());
    }

    #[test]
    fn circle_feeds_area() {
        let dir = tempdir().unwrap();
        let shape = dir.path().join("circle.csv");
        let out = dir.path().join("circle_out.json");
        circle(0.2, 12, &shape).unwrap();
        area(&shape, &out, 0.05, 4_000, Some(5), None).unwrap();
        let af = area_json::read_area_function(&out).unwrap();
        let want = immersion::geom2::fan_area(0.2, 12);
        assert!((af.total_area() - want).abs() / want < 0.05);
    }
}
