use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use planar::geom::Coord;
use planar::poly::rand::{draw_triangle_fan, FanCfg, FanCount, ReplayToken};
use planar::poly::{Convex, Polygon};
use planar::rect::Rectangle;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Assemble convex polygons from triangle fans and query them")]
struct Cmd {
    /// Optional run label; propagated to sidecars and logs
    #[arg(long)]
    label: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw a seeded triangle fan, merge it, and write the polygon as JSON
    Assemble {
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 6)]
        triangles: usize,
        #[arg(long, default_value_t = 5_000)]
        radius: i64,
        #[arg(long)]
        out: String,
    },
    /// Cross-check the three containment algorithms on random coords
    Query {
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 6)]
        triangles: usize,
        #[arg(long, default_value_t = 4096)]
        coords: usize,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Assemble {
            seed,
            triangles,
            radius,
            out,
        } => assemble(seed, triangles, radius, out, cmd.label),
        Action::Query {
            seed,
            triangles,
            coords,
        } => query(seed, triangles, coords),
    }
}

#[derive(Serialize)]
struct PolygonDoc {
    index: i64,
    vertex_indices: Vec<i64>,
    coords: Vec<[i32; 2]>,
    edge_ids: Vec<i64>,
    center: [i32; 2],
    weighted_center: [i32; 2],
    triangles: usize,
}

fn coord_pair(coord: Coord) -> [i32; 2] {
    [coord.x, coord.z]
}

fn build_fan(seed: u64, triangles: usize, radius: i64) -> Result<Convex> {
    let cfg = FanCfg {
        triangles: FanCount::Fixed(triangles),
        radius,
        ..FanCfg::default()
    };
    let fan = draw_triangle_fan(cfg, ReplayToken { seed, index: 0 });
    let mut poly = Convex::from_triangle(fan[0].clone(), 1);
    for t in &fan[1..] {
        if !poly.merge_triangle(t) {
            bail!("fan triangle {} failed to merge", t.index);
        }
    }
    poly.normalize_ccw();
    if !poly.validate() {
        bail!("assembled polygon failed validation");
    }
    Ok(poly)
}

fn assemble(
    seed: u64,
    triangles: usize,
    radius: i64,
    out: String,
    label: Option<String>,
) -> Result<()> {
    tracing::info!(seed, triangles, radius, out, label = ?label, "assemble");
    let poly = build_fan(seed, triangles, radius)?;
    let doc = PolygonDoc {
        index: poly.index(),
        vertex_indices: poly.vertices().iter().map(|v| v.index).collect(),
        coords: poly.vertices().iter().map(|v| coord_pair(v.coord)).collect(),
        edge_ids: poly.edge_ids().to_vec(),
        center: coord_pair(poly.center_coord()),
        weighted_center: coord_pair(poly.weighted_center_coord()),
        triangles: poly.merged().len(),
    };

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&out, serde_json::to_vec_pretty(&doc)?)?;

    let mut payload = provenance::Payload::new(serde_json::json!({
        "seed": seed,
        "triangles": triangles,
        "radius": radius,
    }));
    payload.tags.extend(label);
    provenance::write_sidecar(&out, payload)?;
    Ok(())
}

fn query(seed: u64, triangles: usize, coords: usize) -> Result<()> {
    tracing::info!(seed, triangles, coords, "query");
    let poly = build_fan(seed, triangles, 5_000)?;
    let (min_x, min_z, max_x, max_z) = poly.to_rect();
    let field = Rectangle::new(
        (min_x - 500) as i32,
        (min_z - 500) as i32,
        max_x - min_x + 1_000,
        max_z - min_z + 1_000,
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut inside = 0usize;
    for _ in 0..coords {
        let coord = field.rand_coord(&mut rng);
        let scan = poly.contains(coord);
        let ray = poly.contains_raycast(coord);
        let bis = poly.contains_bisect(coord);
        if scan != ray || scan != bis {
            bail!(
                "containment disagreement at ({}, {}): scan={scan} raycast={ray} bisect={bis}",
                coord.x,
                coord.z
            );
        }
        inside += scan as usize;
    }

    let stats = serde_json::json!({
        "seed": seed,
        "triangles": poly.merged().len(),
        "vertex_count": poly.vertices().len(),
        "coords": coords,
        "inside": inside,
    });
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
